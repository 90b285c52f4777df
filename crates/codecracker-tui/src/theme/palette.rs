//! Color palette for the CodeCracker TUI.

use codecracker_core::{palette_index, PALETTE_SIZE};
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Chart slices (Material colors, assigned by position) ---
pub const CHART_PALETTE: [Color; PALETTE_SIZE] = [
    Color::Rgb(0x21, 0x96, 0xF3), // Blue
    Color::Rgb(0x4C, 0xAF, 0x50), // Green
    Color::Rgb(0xFF, 0xC1, 0x07), // Amber
    Color::Rgb(0x9C, 0x27, 0xB0), // Purple
    Color::Rgb(0xF4, 0x43, 0x36), // Red
    Color::Rgb(0x00, 0xBC, 0xD4), // Cyan
    Color::Rgb(0xFF, 0x98, 0x00), // Orange
    Color::Rgb(0x79, 0x55, 0x48), // Brown
    Color::Rgb(0x60, 0x7D, 0x8B), // Blue Grey
    Color::Rgb(0xE9, 0x1E, 0x63), // Pink
];

/// Color of the slice at `index`
pub fn slice_color(index: usize) -> Color {
    CHART_PALETTE[palette_index(index)]
}
