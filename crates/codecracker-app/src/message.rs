//! Message types for the application (TEA pattern)

use codecracker_core::{Platform, ProfileStats};

use crate::input_key::InputKey;
use crate::state::RequestId;

/// Result of one profile fetch as it travels back to the update loop.
///
/// The error side is already the user-visible message.
pub type FetchOutcome = Result<ProfileStats, String>;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Navigation
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next form field
    FocusNext,
    /// Move focus to the previous form field
    FocusPrevious,

    // ─────────────────────────────────────────────────────────
    // Form Input
    // ─────────────────────────────────────────────────────────
    /// Select a specific platform
    SelectPlatform(Platform),
    /// Cycle the platform selector forward
    NextPlatform,
    /// Cycle the platform selector backward
    PreviousPlatform,
    /// Append a character to the username
    UsernameInput(char),
    /// Delete the last username character
    UsernameBackspace,
    /// Clear the username
    UsernameClear,
    /// Replace the username wholesale (CLI prefill)
    SetUsername(String),

    // ─────────────────────────────────────────────────────────
    // Profile Fetch
    // ─────────────────────────────────────────────────────────
    /// Submit the form (no-op unless both fields are filled and idle)
    Submit,
    /// A fetch task finished
    ProfileFetched {
        request_id: RequestId,
        result: FetchOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Chart Legend
    // ─────────────────────────────────────────────────────────
    /// Highlight the next chart slice
    SelectNextSlice,
    /// Highlight the previous chart slice
    SelectPreviousSlice,
}
