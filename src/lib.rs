//! CodeCracker Library
//!
//! Entry points shared by the binary: the headless NDJSON runner and the
//! API health check. The interactive UI lives in `codecracker-tui`.

pub mod headless;

use codecracker_client::{ApiClient, HealthStatus};
use codecracker_core::prelude::*;

pub use codecracker_tui::{run, RunOptions};
pub use headless::{run_headless, run_headless_with, HeadlessEvent};

/// Query `GET <base>/health`
pub async fn check_health(
    base_url: &str,
    timeout: Option<std::time::Duration>,
) -> Result<HealthStatus> {
    let client = ApiClient::new(base_url, timeout)?;
    let health = client.health().await?;
    info!("Health check at {}: {}", client.base_url(), health.status);
    Ok(health)
}
