//! Readiness checks for the backend's HTTP server.

use std::io;
use std::time::Duration;

use reqwest::Client;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::error::{LaunchError, LaunchResult};

/// Root URL the backend serves on.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/";

const POLL_INTERVAL: Duration = Duration::from_millis(500);
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Make a single request to `url` and report whether it answered 2xx.
///
/// Connection failures count as "not ready", not as errors.
pub async fn check_backend(url: &str) -> LaunchResult<bool> {
    Ok(probe(&probe_client()?, url).await)
}

fn probe_client() -> LaunchResult<Client> {
    let client = Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(io::Error::other)?;
    Ok(client)
}

async fn probe(client: &Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => true,
        Ok(response) => {
            debug!(status = %response.status(), "Backend not ready yet");
            false
        }
        Err(e) => {
            debug!("Backend probe failed: {e}");
            false
        }
    }
}

/// Poll `url` until the backend answers with success or `timeout` elapses.
pub async fn wait_for_backend(url: &str, timeout: Duration) -> LaunchResult<()> {
    info!("Waiting for backend to be ready at {url}");

    let client = probe_client()?;
    let started = Instant::now();

    loop {
        if probe(&client, url).await {
            info!("Backend is ready at {url}");
            return Ok(());
        }

        let waited = started.elapsed();
        if waited >= timeout {
            return Err(LaunchError::NotReady {
                url: url.to_string(),
                waited,
            });
        }
        sleep(POLL_INTERVAL.min(timeout - waited)).await;
    }
}
