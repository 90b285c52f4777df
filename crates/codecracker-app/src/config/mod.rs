//! Configuration file parsing for CodeCracker
//!
//! Supports `<config_dir>/codecracker/config.toml` plus the
//! `CODECRACKER_API_URL` environment override.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, init_config_dir, load_settings, resolve_base_url, API_URL_ENV_VAR,
};
pub use types::*;
