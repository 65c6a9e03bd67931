//! Available subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use relief_core::Resource;

/// Commands accepted by the `relief` binary.
///
/// Resource names are `relief_camps`, `victims`, `missing_persons`,
/// `inventory` and `volunteers` (dashes also accepted). Form data is given
/// URL-encoded, e.g. `--form "name=Jane&phone="`; empty values are sent as
/// `null`.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the backend server and supervise it until Ctrl+C
    Start(StartArgs),

    /// List every record of a resource
    List {
        /// Resource to list
        resource: Resource,
    },

    /// Show one record
    Get {
        resource: Resource,
        /// Record id
        id: String,
    },

    /// Create a record from form data
    Create {
        resource: Resource,
        /// URL-encoded form fields
        #[arg(long)]
        form: String,
    },

    /// Replace fields of a record from form data
    Update {
        resource: Resource,
        id: String,
        /// URL-encoded form fields
        #[arg(long)]
        form: String,
    },

    /// Delete a record
    Delete { resource: Resource, id: String },

    /// Submit the contact form
    Contact {
        /// URL-encoded form fields (name, email, message)
        #[arg(long)]
        form: String,
    },
}

/// Options for `relief start`.
#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Directory containing `backend/app.py` (defaults to the executable's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Python interpreter to run (defaults to `python` on Windows, `python3` elsewhere)
    #[arg(long)]
    pub interpreter: Option<String>,

    /// Wait until the backend answers HTTP requests before printing the banner
    #[arg(long)]
    pub wait_ready: bool,

    /// Seconds to wait for readiness
    #[arg(long, default_value_t = 30)]
    pub ready_timeout: u64,

    /// Exit with the backend's exit code when it fails
    #[arg(long)]
    pub propagate_exit_code: bool,
}
