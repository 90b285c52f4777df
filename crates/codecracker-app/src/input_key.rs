//! Abstract input key event, independent of terminal library.
//!
//! The form handlers match on `InputKey` rather than crossterm types so the
//! TEA core can be driven from tests and the headless runner without a
//! terminal.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (typed into the username field)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c quits, Ctrl+u clears the field)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    /// Submits the form
    Enter,
    /// Quits
    Esc,
    /// Moves focus to the next form field
    Tab,
    /// Moves focus to the previous form field
    BackTab,
    Backspace,
}
