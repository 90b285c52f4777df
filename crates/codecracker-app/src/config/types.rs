//! Configuration types for CodeCracker
//!
//! Defines `Settings` (the `config.toml` document) and its sections.

use std::time::Duration;

use codecracker_client::DEFAULT_BASE_URL;
use codecracker_core::Platform;
use serde::{Deserialize, Serialize};

/// Application settings (`<config_dir>/codecracker/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Statistics API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base endpoint; `/api/profile` and `/health` are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (0 = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Platform preselected in the form
    #[serde(default)]
    pub default_platform: Option<Platform>,

    /// Drop responses to requests that a newer submission superseded.
    /// `false` applies every response as it arrives (last write wins).
    #[serde(default = "default_true")]
    pub discard_stale_responses: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_platform: None,
            discard_stale_responses: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the per-language legend next to the pie chart
    #[serde(default = "default_true")]
    pub show_legend: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_legend: true }
    }
}

fn default_true() -> bool {
    true
}
