//! Key event handlers for each focused field

use codecracker_core::Platform;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField};

/// Convert key events to messages based on the focused field
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys first
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        InputKey::Enter => return Some(Message::Submit),
        _ => {}
    }

    match state.form.focus {
        FormField::Platform => handle_key_platform(key),
        FormField::Username => handle_key_username(key),
        FormField::Submit => handle_key_submit(key),
        FormField::Chart => handle_key_chart(key),
    }
}

/// Platform selector: arrows cycle, 1/2/3 pick directly
fn handle_key_platform(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Right | InputKey::Char('j') => Some(Message::NextPlatform),
        InputKey::Up | InputKey::Left | InputKey::Char('k') => Some(Message::PreviousPlatform),
        InputKey::Char('1') => Some(Message::SelectPlatform(Platform::LeetCode)),
        InputKey::Char('2') => Some(Message::SelectPlatform(Platform::CodeChef)),
        InputKey::Char('3') => Some(Message::SelectPlatform(Platform::CodeForces)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Username text input
fn handle_key_username(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::UsernameInput(c)),
        InputKey::Backspace => Some(Message::UsernameBackspace),
        InputKey::CharCtrl('u') => Some(Message::UsernameClear),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        _ => None,
    }
}

fn handle_key_submit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') => Some(Message::Submit),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Chart legend: move the highlighted slice
fn handle_key_chart(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextSlice),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousSlice),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
