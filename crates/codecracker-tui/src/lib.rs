//! codecracker-tui - Terminal UI for CodeCracker
//!
//! This crate provides the ratatui-based terminal interface: the profile
//! form, the stats card with its Braille pie chart and radial labels, event
//! polling, and the main loop that drives `codecracker-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, RunOptions};
