//! Main update function - handles state transitions (TEA pattern)

use codecracker_core::Platform;
use tracing::{debug, info, warn};

use crate::message::{FetchOutcome, Message};
use crate::state::{AppPhase, AppState, FormField, RequestId};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.profile.loading {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.form.focus = next_focus(state);
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.form.focus = previous_focus(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Input
        // ─────────────────────────────────────────────────────────
        Message::SelectPlatform(platform) => {
            state.form.platform = Some(platform);
            UpdateResult::none()
        }

        Message::NextPlatform => {
            state.form.platform = Some(match state.form.platform {
                Some(p) => p.next(),
                None => Platform::ALL[0],
            });
            UpdateResult::none()
        }

        Message::PreviousPlatform => {
            state.form.platform = Some(match state.form.platform {
                Some(p) => p.previous(),
                None => Platform::ALL[Platform::ALL.len() - 1],
            });
            UpdateResult::none()
        }

        Message::UsernameInput(c) => {
            state.form.username.push(c);
            UpdateResult::none()
        }

        Message::UsernameBackspace => {
            state.form.username.pop();
            UpdateResult::none()
        }

        Message::UsernameClear => {
            state.form.username.clear();
            UpdateResult::none()
        }

        Message::SetUsername(username) => {
            state.form.username = username;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Profile Fetch
        // ─────────────────────────────────────────────────────────
        Message::Submit => handle_submit(state),

        Message::ProfileFetched { request_id, result } => {
            handle_profile_fetched(state, request_id, result)
        }

        // ─────────────────────────────────────────────────────────
        // Chart Legend
        // ─────────────────────────────────────────────────────────
        Message::SelectNextSlice => {
            let count = state.slice_count();
            if count > 0 {
                state.selected_slice = Some(match state.selected_slice {
                    Some(i) => (i + 1) % count,
                    None => 0,
                });
            }
            UpdateResult::none()
        }

        Message::SelectPreviousSlice => {
            let count = state.slice_count();
            if count > 0 {
                state.selected_slice = Some(match state.selected_slice {
                    Some(0) | None => count - 1,
                    Some(i) => (i - 1).min(count - 1),
                });
            }
            UpdateResult::none()
        }
    }
}

/// Start a fetch for the current form values.
///
/// No-op while either field is empty or a request is pending.
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.can_submit() {
        debug!(
            "Submit ignored (complete: {}, loading: {})",
            state.form.is_complete(),
            state.profile.loading
        );
        return UpdateResult::none();
    }

    let query = match state.form.query() {
        Ok(query) => query,
        Err(e) => {
            warn!("Submit ignored: {}", e);
            return UpdateResult::none();
        }
    };

    let request_id = state.begin_request();
    state.profile = state.profile.submit_started();
    state.selected_slice = None;
    if state.form.focus == FormField::Chart {
        state.form.focus = FormField::Submit;
    }

    info!(
        "Fetching {} profile for '{}' ({})",
        query.platform(),
        query.username(),
        request_id
    );

    UpdateResult::action(UpdateAction::FetchProfile { request_id, query })
}

/// Apply a finished fetch, unless a newer submission superseded it
fn handle_profile_fetched(
    state: &mut AppState,
    request_id: RequestId,
    result: FetchOutcome,
) -> UpdateResult {
    state.pending_requests = state.pending_requests.saturating_sub(1);

    if !state.is_current_request(request_id) {
        debug!(
            "Discarding response to superseded request {} (latest: {:?})",
            request_id, state.latest_request
        );
        return UpdateResult::none();
    }

    state.profile = match result {
        Ok(stats) => {
            debug!("Profile loaded for request {}", request_id);
            state.profile.succeeded(stats)
        }
        Err(message) => {
            debug!("Profile fetch failed for request {}: {}", request_id, message);
            state.profile.failed(message)
        }
    };
    state.selected_slice = None;

    if state.form.focus == FormField::Chart && state.slice_count() == 0 {
        state.form.focus = FormField::Platform;
    }

    UpdateResult::none()
}

/// Focus order, with the chart only reachable while it has slices
fn focus_cycle(state: &AppState) -> Vec<FormField> {
    let mut fields = vec![FormField::Platform, FormField::Username, FormField::Submit];
    if state.slice_count() > 0 {
        fields.push(FormField::Chart);
    }
    fields
}

fn next_focus(state: &AppState) -> FormField {
    let fields = focus_cycle(state);
    match fields.iter().position(|f| *f == state.form.focus) {
        Some(i) => fields[(i + 1) % fields.len()],
        None => FormField::Platform,
    }
}

fn previous_focus(state: &AppState) -> FormField {
    let fields = focus_cycle(state);
    match fields.iter().position(|f| *f == state.form.focus) {
        Some(0) => fields[fields.len() - 1],
        Some(i) => fields[i - 1],
        None => FormField::Platform,
    }
}
