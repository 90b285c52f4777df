//! Per-language legend beside the pie chart

use codecracker_core::ChartSlice;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

const SWATCH: &str = "■ ";

pub struct Legend<'a> {
    slices: &'a [ChartSlice],
    selected: Option<usize>,
    focused: bool,
}

impl<'a> Legend<'a> {
    pub fn new(slices: &'a [ChartSlice]) -> Self {
        Self {
            slices,
            selected: None,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Columns needed to show every entry without truncation
    pub fn required_width(slices: &[ChartSlice]) -> u16 {
        slices
            .iter()
            .map(|s| SWATCH.width() + entry_text(s).width() + 1)
            .max()
            .map(|w| u16::try_from(w).unwrap_or(u16::MAX))
            .unwrap_or(0)
    }
}

/// `"Python: 80 problems (66.7%)"`
fn entry_text(slice: &ChartSlice) -> String {
    format!("{}: {}", slice.name, slice.tooltip_text())
}

impl Widget for Legend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .slices
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let text_style = match (self.selected == Some(index), self.focused) {
                    (true, true) => styles::focused_selected(),
                    (true, false) => Style::default()
                        .fg(palette::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                    _ => styles::text_secondary(),
                };
                Line::from(vec![
                    Span::styled(SWATCH, Style::default().fg(palette::slice_color(index))),
                    Span::styled(entry_text(slice), text_style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
