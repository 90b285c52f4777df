//! Derivation of what the stats area shows
//!
//! [`stats_view`] is a pure function of the fetch slots; the TUI and the
//! headless runner both render from its output.

use codecracker_core::{build_slices, ChartSlice, Platform, ProfileStats};
use serde::Serialize;

/// Title of the chart section
pub const CHART_SECTION_TITLE: &str = "Language Distribution";

/// Content of the stats area
#[derive(Debug, Clone, PartialEq)]
pub enum StatsView {
    /// A request is pending; show a progress indicator
    Loading,
    /// Show only this message
    Error(String),
    /// Nothing fetched yet; render nothing
    Empty,
    /// Summary rows and (optionally) the chart
    Summary(ProfileSummary),
}

/// One labeled summary field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Fetched profile as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub title: String,
    pub rows: Vec<SummaryRow>,
    pub slices: Vec<ChartSlice>,
}

impl ProfileSummary {
    /// The chart section is drawn only when at least one slice exists
    pub fn has_chart(&self) -> bool {
        !self.slices.is_empty()
    }

    /// Value of the row with the given label
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// Decide what the stats area shows.
///
/// Loading wins over everything, then a non-empty error, then the stats.
/// The title uses the platform currently selected in the form.
pub fn stats_view(
    stats: Option<&ProfileStats>,
    loading: bool,
    error: Option<&str>,
    platform: Option<Platform>,
) -> StatsView {
    if loading {
        return StatsView::Loading;
    }

    if let Some(message) = error.filter(|m| !m.is_empty()) {
        return StatsView::Error(message.to_string());
    }

    let Some(stats) = stats else {
        return StatsView::Empty;
    };

    StatsView::Summary(ProfileSummary {
        title: summary_title(platform),
        rows: summary_rows(stats),
        slices: build_slices(&stats.language_stats),
    })
}

fn summary_title(platform: Option<Platform>) -> String {
    match platform {
        Some(p) => format!("{} Profile Stats", p.capitalized()),
        None => "Profile Stats".to_string(),
    }
}

fn summary_rows(stats: &ProfileStats) -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            label: "Username",
            value: stats.username_display(),
        },
        SummaryRow {
            label: "Rating",
            value: stats.rating_display(),
        },
        SummaryRow {
            label: "Problems Solved",
            value: stats.solved_display(),
        },
        SummaryRow {
            label: "Global Rank",
            value: stats.rank_display(),
        },
    ]
}
