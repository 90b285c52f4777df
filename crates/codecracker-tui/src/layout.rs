//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + title row + subtitle row + border
pub const HEADER_HEIGHT: u16 = 4;

/// Form: border + platform row + username row + button row + border
pub const FORM_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and subtitle
    pub header: Rect,
    /// Platform selector, username field, submit button
    pub form: Rect,
    /// Stats card (loading, error, or summary with chart)
    pub stats: Rect,
    /// Keybinding hints
    pub hints: Rect,
}

/// Split the screen into header, form, stats card and hint line
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        stats: chunks[2],
        hints: chunks[3],
    }
}

/// Areas inside the stats card
#[derive(Debug, Clone, Copy)]
pub struct CardAreas {
    /// Summary rows
    pub summary: Rect,
    /// "Language Distribution" heading plus chart and legend
    pub chart: Rect,
}

/// Number of summary rows plus a blank separator
pub const SUMMARY_HEIGHT: u16 = 5;

pub fn card(inner: Rect) -> CardAreas {
    let chunks =
        Layout::vertical([Constraint::Length(SUMMARY_HEIGHT), Constraint::Min(0)]).split(inner);
    CardAreas {
        summary: chunks[0],
        chart: chunks[1],
    }
}

/// Split the chart section into the pie canvas and an optional legend
pub fn chart_with_legend(area: Rect, legend_width: u16) -> (Rect, Option<Rect>) {
    // Legend only when the pie keeps at least half the width
    if legend_width == 0 || legend_width.saturating_mul(2) > area.width {
        return (area, None);
    }
    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(legend_width)]).split(area);
    (chunks[0], Some(chunks[1]))
}
