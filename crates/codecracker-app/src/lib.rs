//! codecracker-app - Application state and orchestration for CodeCracker
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! profile form: state, messages, the pure `update` function, the action
//! layer that runs fetches in the background, configuration loading, and
//! the derivation of what the stats area shows.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod stats_view;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{FetchOutcome, Message};
pub use process::process_message;
pub use state::{AppPhase, AppState, FormField, FormState, ProfileView, RequestId};
pub use stats_view::{stats_view, ProfileSummary, StatsView, SummaryRow, CHART_SECTION_TITLE};

/// Capacity of the message channel between background tasks and the loop
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;
