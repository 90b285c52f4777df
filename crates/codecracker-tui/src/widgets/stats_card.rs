//! Stats card: progress, error, or the fetched summary with its chart

use codecracker_app::{ProfileSummary, StatsView, CHART_SECTION_TITLE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{Legend, PieChart};
use crate::layout;
use crate::theme::{palette, styles};

/// Braille spinner frames, advanced by `Tick`
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Fetching profile data...";

pub struct StatsCard<'a> {
    view: &'a StatsView,
    spinner_frame: usize,
    selected_slice: Option<usize>,
    show_legend: bool,
    chart_focused: bool,
}

impl<'a> StatsCard<'a> {
    pub fn new(view: &'a StatsView) -> Self {
        Self {
            view,
            spinner_frame: 0,
            selected_slice: None,
            show_legend: true,
            chart_focused: false,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    pub fn selected_slice(mut self, selected: Option<usize>) -> Self {
        self.selected_slice = selected;
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn chart_focused(mut self, focused: bool) -> Self {
        self.chart_focused = focused;
        self
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(spinner, styles::accent_bold()),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, styles::text_secondary()),
        ]);
        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
            .split(inner);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(rows[1], buf);
    }

    fn render_error(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .border_style(styles::status_red())
            .style(Style::default().bg(palette::CARD_BG));
        Paragraph::new(Line::styled(message.to_string(), styles::status_red()))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_summary(&self, summary: &ProfileSummary, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.chart_focused)
            .title(Span::styled(format!(" {} ", summary.title), styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let areas = layout::card(inner);
        let rows: Vec<Line> = summary
            .rows
            .iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{}: ", row.label), styles::text_secondary()),
                    Span::styled(row.value.clone(), styles::text_primary()),
                ])
            })
            .collect();
        Paragraph::new(rows).render(areas.summary, buf);

        if !summary.has_chart() || areas.chart.height < 2 {
            return;
        }

        let [heading, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(areas.chart);
        Paragraph::new(Line::styled(CHART_SECTION_TITLE, styles::accent_bold())).render(heading, buf);

        let legend_width = if self.show_legend {
            Legend::required_width(&summary.slices)
        } else {
            0
        };
        let (pie_area, legend_area) = layout::chart_with_legend(body, legend_width);

        PieChart::new(&summary.slices)
            .selected(self.selected_slice)
            .render(pie_area, buf);

        if let Some(legend_area) = legend_area {
            Legend::new(&summary.slices)
                .selected(self.selected_slice)
                .focused(self.chart_focused)
                .render(legend_area, buf);
        }
    }
}

impl Widget for StatsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.view {
            StatsView::Loading => self.render_loading(area, buf),
            StatsView::Error(message) => self.render_error(message, area, buf),
            StatsView::Empty => {}
            StatsView::Summary(summary) => self.render_summary(summary, area, buf),
        }
    }
}
