//! Header with the application title

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "CodeCracker";
pub const APP_SUBTITLE: &str = "Coding Profile Analyzer";

/// Centered title and subtitle in a glass container
#[derive(Debug, Default)]
pub struct MainHeader;

impl MainHeader {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));

        let lines = vec![
            Line::styled(APP_TITLE, styles::accent_bold()),
            Line::styled(APP_SUBTITLE, styles::text_secondary()),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
