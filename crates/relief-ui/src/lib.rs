//! Page helpers for the relief management client.
//!
//! - [`Page::show_notice`] shows a dismissible notice that removes itself
//!   after [`NOTICE_LIFETIME`].
//! - [`serialize_form`] turns form field entries into a request payload,
//!   with empty values sent as `null`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod form;
mod notice;

pub use form::{Form, serialize_form};
pub use notice::{NOTICE_LIFETIME, Notice, NoticeId, NoticeKind, Page, Region};
