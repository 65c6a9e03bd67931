//! Core domain types shared by the relief management client crates.
//!
//! This crate has no I/O. It names the backend resources, defines the
//! payload type sent as request bodies and models the response envelope
//! the backend wraps its data in.

#![deny(unused_crate_dependencies)]

pub mod envelope;
pub mod payload;
pub mod resource;

pub use envelope::Envelope;
pub use payload::{Payload, payload_from_pairs};
pub use resource::{Resource, UnknownResource};
