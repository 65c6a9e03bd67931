//! Process runtime for the relief management backend.
//!
//! [`BackendLauncher`] starts the Python backend with the platform's
//! interpreter and inherited terminal I/O. [`RunningBackend`] forwards
//! Ctrl+C to it and reports how it exited.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod error;
mod health;
mod launcher;
mod platform;

pub use error::{LaunchError, LaunchResult};
pub use health::{DEFAULT_BACKEND_URL, check_backend, wait_for_backend};
pub use launcher::{
    BackendLauncher, DEFAULT_GRACE_PERIOD, ExitReport, LauncherConfig, Readiness, RunningBackend,
    Supervision,
};
pub use platform::Platform;

// Process tests are Unix-only
#[cfg(all(test, not(unix)))]
use tempfile as _;
