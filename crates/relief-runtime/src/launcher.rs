//! Backend process launcher.
//!
//! Starts `backend/app.py` below the launcher directory with the platform's
//! Python interpreter. The child shares the launcher's terminal, so its
//! output appears directly and it receives the same Ctrl+C.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

use crate::error::{LaunchError, LaunchResult};
use crate::health::wait_for_backend;
use crate::platform::Platform;

/// How long a stopped backend may take to exit before it is killed.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);

const BACKEND_DIR: &str = "backend";
const ENTRY_SCRIPT: &str = "app.py";

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Directory containing `backend/app.py`. Defaults to the directory of
    /// the running executable.
    pub root: Option<PathBuf>,
    /// Interpreter command. Defaults to [`Platform::interpreter`].
    pub interpreter: Option<String>,
    pub grace_period: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            root: None,
            interpreter: None,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }
}

impl LauncherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }

    #[must_use]
    pub const fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Interpreter command that will be spawned.
    pub fn interpreter(&self) -> &str {
        self.interpreter
            .as_deref()
            .unwrap_or_else(|| Platform::current().interpreter())
    }

    /// Resolve the launcher directory.
    pub fn root(&self) -> LaunchResult<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        let exe = std::env::current_exe().map_err(LaunchError::ExecutableDir)?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            LaunchError::ExecutableDir(io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })
    }

    /// Path of the backend entry script.
    pub fn entry_point(&self) -> LaunchResult<PathBuf> {
        Ok(self.root()?.join(BACKEND_DIR).join(ENTRY_SCRIPT))
    }
}

// ============================================================================
// Launcher
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct BackendLauncher {
    config: LauncherConfig,
}

impl BackendLauncher {
    pub const fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Spawn the backend. The child is not restarted if it dies.
    pub fn start(&self) -> LaunchResult<RunningBackend> {
        let interpreter = self.config.interpreter().to_string();
        let entry_point = self.config.entry_point()?;

        if !entry_point.is_file() {
            warn!(path = %entry_point.display(), "Backend entry point not found");
        }

        info!("Starting backend server...");
        debug!(%interpreter, path = %entry_point.display(), "spawning backend");

        let child = Command::new(&interpreter)
            .arg(&entry_point)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                interpreter: interpreter.clone(),
                source,
            })?;

        Ok(RunningBackend {
            child,
            grace_period: self.config.grace_period,
        })
    }
}

// ============================================================================
// Running process
// ============================================================================

/// How the backend process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    /// Exit code, or `None` when the process was ended by a signal.
    pub code: Option<i32>,
}

impl ExitReport {
    /// Anything other than a clean `0` exit.
    pub const fn is_failure(&self) -> bool {
        !matches!(self.code, Some(0))
    }
}

impl From<ExitStatus> for ExitReport {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Outcome of [`RunningBackend::supervise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supervision {
    /// The backend exited on its own.
    Exited(ExitReport),
    /// Ctrl+C was received and the backend was stopped.
    Interrupted(ExitReport),
}

/// Outcome of [`RunningBackend::wait_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The backend answered its readiness probe and is still running.
    Ready,
    /// The backend ended, or was stopped, before it became ready.
    Finished(Supervision),
}

enum Event {
    Exited(io::Result<ExitStatus>),
    Shutdown(io::Result<()>),
}

/// Handle to a spawned backend.
#[derive(Debug)]
pub struct RunningBackend {
    child: Child,
    grace_period: Duration,
}

impl RunningBackend {
    /// OS process id, or `None` once the child has been reaped.
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    /// Ask the backend to stop: SIGINT on Unix, a hard kill elsewhere.
    ///
    /// Succeeds if the process is already gone.
    pub fn interrupt(&mut self) -> LaunchResult<()> {
        let Some(pid) = self.child.id() else {
            return Ok(());
        };

        #[cfg(unix)]
        {
            let raw = i32::try_from(pid)
                .map_err(|_| LaunchError::Signal(format!("pid {pid} out of range")))?;
            match signal::kill(Pid::from_raw(raw), Signal::SIGINT) {
                Ok(()) | Err(nix::errno::Errno::ESRCH) => Ok(()),
                Err(e) => Err(LaunchError::Signal(e.to_string())),
            }
        }

        #[cfg(not(unix))]
        {
            debug!(pid, "no SIGINT on this platform; killing backend");
            self.child.start_kill().map_err(LaunchError::Io)
        }
    }

    /// Wait for the backend to exit.
    pub async fn wait(&mut self) -> LaunchResult<ExitReport> {
        let status = self.child.wait().await?;
        Ok(ExitReport::from(status))
    }

    /// Interrupt the backend and reap it, killing it if it outlives the
    /// grace period.
    pub async fn stop(&mut self) -> LaunchResult<ExitReport> {
        self.interrupt()?;

        if let Ok(status) = timeout(self.grace_period, self.child.wait()).await {
            return Ok(ExitReport::from(status?));
        }

        warn!(
            grace_period = ?self.grace_period,
            "Backend did not exit after interrupt; killing"
        );
        self.child.kill().await?;
        self.wait().await
    }

    /// Run until the backend exits or Ctrl+C arrives.
    ///
    /// On Ctrl+C the interrupt is forwarded and the backend is stopped
    /// before returning.
    pub async fn supervise(self) -> LaunchResult<Supervision> {
        self.supervise_until(tokio::signal::ctrl_c()).await
    }

    /// Run until the backend exits or `shutdown` resolves.
    ///
    /// When `shutdown` wins, the backend is stopped as by [`stop`](Self::stop).
    pub async fn supervise_until<F>(mut self, shutdown: F) -> LaunchResult<Supervision>
    where
        F: Future<Output = io::Result<()>>,
    {
        let event = tokio::select! {
            status = self.child.wait() => Event::Exited(status),
            signal = shutdown => Event::Shutdown(signal),
        };
        self.settle(event).await
    }

    /// Poll `url` until the backend answers, while still watching the child
    /// and `shutdown`.
    ///
    /// A backend that dies during start-up is reported as
    /// [`Readiness::Finished`] rather than waiting out `timeout`. Pass the
    /// same pinned shutdown future on to
    /// [`supervise_until`](Self::supervise_until) afterwards so no interrupt
    /// is missed between the two phases.
    pub async fn wait_ready<F>(
        &mut self,
        url: &str,
        timeout: Duration,
        shutdown: F,
    ) -> LaunchResult<Readiness>
    where
        F: Future<Output = io::Result<()>>,
    {
        let event = tokio::select! {
            ready = wait_for_backend(url, timeout) => {
                ready?;
                return Ok(Readiness::Ready);
            }
            status = self.child.wait() => Event::Exited(status),
            signal = shutdown => Event::Shutdown(signal),
        };
        self.settle(event).await.map(Readiness::Finished)
    }

    async fn settle(&mut self, event: Event) -> LaunchResult<Supervision> {
        match event {
            Event::Exited(status) => {
                let report = ExitReport::from(status?);
                if report.is_failure() {
                    error!(
                        code = ?report.code,
                        "Backend process exited with code {}",
                        describe_code(report.code)
                    );
                }
                info!("Backend server stopped");
                Ok(Supervision::Exited(report))
            }
            Event::Shutdown(signal) => {
                signal?;
                info!("Stopping backend server...");
                let report = self.stop().await?;
                info!("Backend server stopped");
                Ok(Supervision::Interrupted(report))
            }
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string())
}
