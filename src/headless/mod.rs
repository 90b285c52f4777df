//! Headless mode - NDJSON event output instead of the TUI
//!
//! Submits one query and prints what the stats area would show as
//! newline-delimited JSON, one event per line, each with an `"event"` field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submit_started","platform":"leetcode","username":"alice","request_id":1,"timestamp":1704700001000}
//! {"event":"profile_loaded","title":"Leetcode Profile Stats","rows":[...],"slices":[...],"timestamp":1704700001200}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use codecracker_app::{ProfileSummary, SummaryRow};
use codecracker_core::{palette_index, ChartSlice, CHART_PALETTE_HEX};
use serde::Serialize;
use tracing::error;

pub use runner::{run_headless, run_headless_with};

/// One chart slice as reported in `profile_loaded`
#[derive(Debug, Clone, Serialize)]
pub struct SliceEvent {
    pub name: String,
    pub value: f64,
    /// Share of the total in 0.0..=1.0
    pub percent: f64,
    /// `"Python (80, 66.7%)"`
    pub label: String,
    /// `"80 problems (66.7%)"`
    pub tooltip: String,
    /// Palette color as `#RRGGBB`
    pub color: &'static str,
}

impl SliceEvent {
    fn from_slice(index: usize, slice: &ChartSlice) -> Self {
        Self {
            name: slice.name.clone(),
            value: slice.value,
            percent: slice.percent,
            label: slice.label_text(),
            tooltip: slice.tooltip_text(),
            color: CHART_PALETTE_HEX[palette_index(index)],
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A request was sent
    SubmitStarted {
        platform: String,
        username: String,
        request_id: u64,
        timestamp: i64,
    },

    /// The profile was fetched; mirrors the rendered summary
    ProfileLoaded {
        title: String,
        rows: Vec<SummaryRow>,
        slices: Vec<SliceEvent>,
        timestamp: i64,
    },

    /// The request failed or the run could not start
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn submit_started(platform: &str, username: &str, request_id: u64) -> Self {
        Self::SubmitStarted {
            platform: platform.to_string(),
            username: username.to_string(),
            request_id,
            timestamp: Self::now(),
        }
    }

    pub fn profile_loaded(summary: &ProfileSummary) -> Self {
        Self::ProfileLoaded {
            title: summary.title.clone(),
            rows: summary.rows.clone(),
            slices: summary
                .slices
                .iter()
                .enumerate()
                .map(|(i, s)| SliceEvent::from_slice(i, s))
                .collect(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
