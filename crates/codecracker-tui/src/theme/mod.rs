//! Theme for the CodeCracker TUI.
//!
//! - `palette`: Raw color constants, including the chart slice colors
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;
