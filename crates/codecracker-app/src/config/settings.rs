//! Settings loader for `config.toml` and endpoint resolution

use std::path::{Path, PathBuf};

use codecracker_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "codecracker";

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV_VAR: &str = "CODECRACKER_API_URL";

/// Directory holding `config.toml` (`~/.config/codecracker` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `<config_dir>/config.toml`.
///
/// A missing file yields defaults; an unreadable or invalid file is logged
/// and also yields defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default `config.toml` if none exists yet
pub fn init_config_dir(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config dir {:?}", config_dir))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# CodeCracker Configuration

[api]
# Base endpoint of the statistics API
base_url = "http://localhost:5000"
# Request timeout in seconds (0 = no timeout)
timeout_secs = 0

[behavior]
# Platform preselected in the form: "leetcode", "codechef" or "codeforces"
# default_platform = "leetcode"
# Ignore responses to requests superseded by a newer submission
discard_stale_responses = true

[ui]
# Show the language legend next to the pie chart
show_legend = true
"#;
        std::fs::write(&config_path, default_content)
            .with_context(|| format!("Failed to write {:?}", config_path))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

/// Pick the API base URL: CLI flag, then `CODECRACKER_API_URL`, then the
/// settings file (which itself defaults to `http://localhost:5000`)
pub fn resolve_base_url(cli_override: Option<&str>, settings: &Settings) -> String {
    if let Some(url) = cli_override.filter(|u| !u.trim().is_empty()) {
        return url.to_string();
    }

    match std::env::var(API_URL_ENV_VAR) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => settings.api.base_url.clone(),
    }
}
