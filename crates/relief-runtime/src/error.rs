//! Errors raised while launching or supervising the backend.

use std::io;
use std::time::Duration;

use thiserror::Error;

pub type LaunchResult<T> = Result<T, LaunchError>;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// The interpreter could not be started at all.
    #[error("Failed to start backend with '{interpreter}': {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: io::Error,
    },

    /// The directory of the running executable could not be determined.
    #[error("Cannot locate launcher directory: {0}")]
    ExecutableDir(#[source] io::Error),

    /// Delivering a signal to the child failed.
    #[error("Failed to signal backend: {0}")]
    Signal(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// The backend never answered its readiness probe.
    #[error("Backend at {url} was not ready after {waited:?}")]
    NotReady { url: String, waited: Duration },
}
