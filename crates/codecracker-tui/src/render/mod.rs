//! Main render/view function (View in TEA pattern)


use codecracker_app::{AppState, FormField};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(), areas.header);
    frame.render_widget(widgets::ProfileForm::new(state), areas.form);

    let stats = state.stats_view();
    let card = widgets::StatsCard::new(&stats)
        .spinner_frame(state.spinner_frame)
        .selected_slice(state.selected_slice)
        .show_legend(state.settings.ui.show_legend)
        .chart_focused(state.form.focus == FormField::Chart);
    frame.render_widget(card, areas.stats);

    frame.render_widget(Paragraph::new(hints(state)), areas.hints);
}

/// Keybinding hints for the focused field
fn hints(state: &AppState) -> Line<'static> {
    let focus_hint = match state.form.focus {
        FormField::Platform => ("←/→ 1-3", "platform"),
        FormField::Username => ("type", "username"),
        FormField::Submit => ("Space", "fetch"),
        FormField::Chart => ("↑/↓", "select language"),
    };

    let mut spans = Vec::new();
    for (key, action) in [
        focus_hint,
        ("Tab", "next field"),
        ("Enter", "fetch"),
        ("Esc", "quit"),
    ] {
        spans.push(Span::styled(format!(" {} ", key), styles::keybinding()));
        spans.push(Span::styled(format!("{} ", action), styles::text_muted()));
    }
    Line::from(spans)
}
