//! `relief start`: launch and supervise the backend.

use std::time::Duration;

use relief_runtime::{
    BackendLauncher, DEFAULT_BACKEND_URL, LauncherConfig, Readiness, Supervision,
};
use tracing::{info, warn};

use crate::commands::StartArgs;
use crate::error::CliError;
use crate::presentation::start_banner;

/// Build the launcher configuration from command-line options.
pub fn launcher_config(args: &StartArgs) -> LauncherConfig {
    let mut config = LauncherConfig::new();
    if let Some(root) = &args.root {
        config = config.with_root(root);
    }
    if let Some(interpreter) = &args.interpreter {
        config = config.with_interpreter(interpreter);
    }
    config
}

/// Start the backend and block until it exits or Ctrl+C is pressed.
///
/// The launcher exits successfully either way unless
/// `--propagate-exit-code` is set and the backend failed.
pub async fn execute(args: &StartArgs) -> Result<(), CliError> {
    println!("Starting Disaster Relief Management System...");
    let mut backend = BackendLauncher::new(launcher_config(args)).start()?;

    // One listener for the readiness wait and supervision
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    if args.wait_ready {
        let timeout = Duration::from_secs(args.ready_timeout);
        match backend
            .wait_ready(DEFAULT_BACKEND_URL, timeout, shutdown.as_mut())
            .await
        {
            Ok(Readiness::Ready) => {}
            Ok(Readiness::Finished(outcome)) => return conclude(args, outcome),
            Err(err) => {
                warn!("Backend never became ready; stopping it");
                backend.stop().await?;
                return Err(err.into());
            }
        }
    }

    for line in start_banner(DEFAULT_BACKEND_URL.trim_end_matches('/')) {
        println!("{line}");
    }

    let outcome = backend.supervise_until(shutdown).await?;
    conclude(args, outcome)
}

/// Map how the backend ended to the launcher's own result.
pub fn conclude(args: &StartArgs, outcome: Supervision) -> Result<(), CliError> {
    match outcome {
        Supervision::Exited(report) if args.propagate_exit_code && report.is_failure() => {
            Err(CliError::BackendExit {
                code: report.code.unwrap_or(1),
            })
        }
        Supervision::Exited(_) => Ok(()),
        Supervision::Interrupted(report) => {
            info!(code = ?report.code, "Backend stopped after interrupt");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_runtime::ExitReport;
    use std::path::PathBuf;

    fn args() -> StartArgs {
        StartArgs {
            root: None,
            interpreter: None,
            wait_ready: false,
            ready_timeout: 30,
            propagate_exit_code: false,
        }
    }

    #[test]
    fn test_launcher_config_defaults() {
        let config = launcher_config(&args());
        assert!(config.root.is_none());
        assert!(config.interpreter.is_none());
    }

    #[test]
    fn test_launcher_config_overrides() {
        let args = StartArgs {
            root: Some(PathBuf::from("/srv/relief")),
            interpreter: Some("python3.11".to_string()),
            ..args()
        };
        let config = launcher_config(&args);
        assert_eq!(config.interpreter(), "python3.11");
        assert_eq!(
            config.entry_point().unwrap(),
            PathBuf::from("/srv/relief/backend/app.py")
        );
    }

    #[tokio::test]
    async fn test_missing_interpreter_is_process_error() {
        let args = StartArgs {
            root: Some(std::env::temp_dir()),
            interpreter: Some("relief-no-such-interpreter".to_string()),
            ..args()
        };
        let err = execute(&args).await.unwrap_err();
        assert_eq!(err.exit_code(), 71);
    }

    #[test]
    fn test_conclude_exit_codes() {
        let failed = Supervision::Exited(ExitReport { code: Some(3) });
        assert!(conclude(&args(), failed).is_ok());

        let propagate = StartArgs {
            propagate_exit_code: true,
            ..args()
        };
        let err = conclude(&propagate, failed).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let interrupted = Supervision::Interrupted(ExitReport { code: None });
        assert!(conclude(&propagate, interrupted).is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_backend_crash_during_wait_ready_keeps_exit_code() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("backend")).unwrap();
        std::fs::write(root.path().join("backend").join("app.py"), "exit 3\n").unwrap();
        let args = StartArgs {
            root: Some(root.path().to_path_buf()),
            interpreter: Some("sh".to_string()),
            wait_ready: true,
            ready_timeout: 20,
            propagate_exit_code: true,
        };

        let started = std::time::Instant::now();
        let err = execute(&args).await.unwrap_err();

        assert!(matches!(err, CliError::BackendExit { code: 3 }));
        assert!(started.elapsed() < Duration::from_secs(20));
    }
}
