//! Buffer-level assertions for widget and screen tests
//!
//! Everything renders into a `TestBackend`; assertions work on the rendered
//! rows as plain strings, one `String` per terminal row.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Size used by `TestTerminal::new`
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Draw a whole frame, e.g. `render::view`
    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("draw into TestBackend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Rendered rows, top to bottom
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    /// Text must fit on a single row to match
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().iter().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.rows()
            .get(usize::from(line))
            .is_some_and(|row| row.contains(text))
    }

    /// Row index of the first row containing `text`
    pub fn find_row(&self, text: &str) -> Option<u16> {
        self.rows()
            .iter()
            .position(|row| row.contains(text))
            .and_then(|y| u16::try_from(y).ok())
    }

    pub fn content(&self) -> String {
        self.rows().join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_default_size() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(term.rows().len(), usize::from(TEST_HEIGHT));
    }

    #[test]
    fn test_row_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Python\nJava"), term.area());

        assert!(term.buffer_contains("Java"));
        assert!(term.line_contains(0, "Python"));
        assert!(!term.line_contains(5, "Python"));
        assert_eq!(term.find_row("Java"), Some(1));
        assert_eq!(term.find_row("Rust"), None);
    }
}
