//! Command-line interface for the relief management system.
//!
//! `relief start` launches the backend; the other commands call the REST
//! API and print the JSON response.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

// Launcher tests are Unix-only
#[cfg(all(test, not(unix)))]
use tempfile as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use commands::{Commands, StartArgs};
pub use error::CliError;
pub use parser::Cli;
