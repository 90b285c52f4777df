//! # codecracker-client - Statistics API Client
//!
//! Talks to the CodeCracker statistics API over HTTP and turns its responses
//! into [`codecracker_core::ProfileStats`] or a user-presentable
//! [`codecracker_core::Error`].
//!
//! ## Public API
//!
//! - [`ApiClient`] - `reqwest`-based client (`POST /api/profile`, `GET /health`)
//! - [`ProfileSource`] - Trait the app layer fetches through
//! - [`classify_response()`] - Pure status/body classification

pub mod client;
pub mod response;
pub mod source;

pub use client::{
    parse_base_url, ApiClient, HealthStatus, DEFAULT_BASE_URL, HEALTH_PATH, PROFILE_PATH,
};
pub use response::{classify_response, error_field, is_success};
pub use source::{LocalProfileSource, ProfileSource};
