//! Profile form: platform selector, username field, submit button

use codecracker_app::{AppState, FormField};
use codecracker_core::Platform;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Caret shown after the username while the field has focus
const CURSOR: &str = "▏";

pub struct ProfileForm<'a> {
    state: &'a AppState,
}

impl<'a> ProfileForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn label_style(&self, field: FormField) -> Style {
        if self.state.form.focus == field {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        }
    }

    fn platform_line(&self) -> Line<'static> {
        let focused = self.state.form.focus == FormField::Platform;
        let mut spans = vec![Span::styled("Platform: ", self.label_style(FormField::Platform))];

        if self.state.form.platform.is_none() {
            spans.push(Span::styled("Select Platform  ", styles::text_muted()));
        }

        for platform in Platform::ALL {
            let selected = self.state.form.platform == Some(platform);
            let style = match (selected, focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::accent_bold(),
                _ => styles::text_secondary(),
            };
            spans.push(Span::styled(format!(" {} ", platform.display_name()), style));
            spans.push(Span::raw(" "));
        }

        Line::from(spans)
    }

    fn username_line(&self) -> Line<'static> {
        let focused = self.state.form.focus == FormField::Username;
        let mut spans = vec![
            Span::styled(
                format!("{}: ", self.state.form.username_label()),
                self.label_style(FormField::Username),
            ),
            Span::styled(self.state.form.username.clone(), styles::text_primary()),
        ];
        if focused {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        let label = format!("[ {} ]", self.state.submit_label());
        let style = if !self.state.can_submit() {
            styles::button_disabled()
        } else if self.state.form.focus == FormField::Submit {
            styles::focused_selected()
        } else {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        };
        Line::from(Span::styled(label, style))
    }
}

impl Widget for ProfileForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(
            self.state.form.focus,
            FormField::Platform | FormField::Username | FormField::Submit
        );
        let block = styles::glass_block(focused)
            .title(" Profile ")
            .style(Style::default().bg(palette::CARD_BG));

        let lines = vec![
            self.platform_line(),
            self.username_line(),
            self.button_line(),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
