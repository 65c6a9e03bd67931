//! CLI error type and exit codes.

use relief_api::{ApiError, ErrorKind};
use relief_runtime::LaunchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The API rejected the request or answered with something unreadable.
    #[error("{0}")]
    Api(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The backend could not be reached.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Launching or supervising the backend failed.
    #[error("Process error: {0}")]
    Process(String),

    /// The backend exited with a failure code and `--propagate-exit-code`
    /// was given.
    #[error("Backend exited with code {code}")]
    BackendExit { code: i32 },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 2: Invalid arguments
    /// - 69: Backend unavailable (`EX_UNAVAILABLE`)
    /// - 71: Process error (`EX_OSERR`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 1,
            Self::Arguments(_) => 2,
            Self::Unavailable(_) => 69,
            Self::Process(_) => 71,
            Self::BackendExit { code } => *code,
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        if matches!(err, ApiError::InvalidUrl(_)) {
            return Self::Arguments(err.to_string());
        }
        match err.kind() {
            ErrorKind::Transport => Self::Unavailable(err.to_string()),
            ErrorKind::Decode | ErrorKind::Application => Self::Api(err.to_string()),
        }
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::NotReady { .. } => Self::Unavailable(err.to_string()),
            other => Self::Process(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Api(format!("Cannot format response: {err}"))
    }
}
