//! # codecracker-core - Core Domain Types
//!
//! Foundation crate for CodeCracker. Provides domain types, the pie chart
//! model, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Platform`] - Supported coding platform (LeetCode, CodeChef, CodeForces)
//! - [`Query`] - Validated `(platform, username)` lookup
//! - [`ProfileStats`] - Statistics returned by the API
//! - [`StatValue`] - A number-or-text statistic with "N/A" fallback
//! - [`LanguageStats`] - Ordered per-language solved counts
//!
//! ### Chart Model (`chart`)
//! - [`ChartSlice`], [`build_slices()`] - Pie slices derived from language stats
//! - [`PieArc`], [`pie_arcs()`] - Angular layout of the slices
//! - [`PieGeometry`], [`LabelLayout`] - Leader line and label placement
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fetch and fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use codecracker_core::prelude::*;
//! ```

pub mod chart;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all CodeCracker crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use chart::{
    arc_at_angle, build_slices, palette_index, pie_arcs, ChartSlice, LabelLayout, PieArc,
    PieGeometry, Point, TextAnchor, CHART_PALETTE_HEX, LABEL_RADIUS_FACTOR, LEADER_LINE_OFFSET,
    PALETTE_SIZE,
};
pub use error::{Error, Result, ResultExt, API_FALLBACK_MESSAGE, TRANSPORT_FALLBACK_MESSAGE};
pub use types::{
    coerce_count, format_number, LanguageCount, LanguageStats, Platform, ProfileStats, Query,
    StatValue, NOT_AVAILABLE,
};
