//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, FormField, RequestId};
use crate::stats_view::StatsView;
use codecracker_core::{Platform, ProfileStats};

fn alice_stats() -> ProfileStats {
    serde_json::from_str(
        r#"{"username":"alice","rating":1500,"solved":120,"rank":5000,
            "languageStats":{"Python":80,"Java":40}}"#,
    )
    .unwrap()
}

fn bob_stats() -> ProfileStats {
    serde_json::from_str(r#"{"username":"bob","languageStats":{"Rust":3}}"#).unwrap()
}

/// State with a complete form
fn filled_state() -> AppState {
    let mut state = AppState::new();
    state.form.platform = Some(Platform::LeetCode);
    state.form.username = "alice".to_string();
    state
}

/// Submit and return the request id carried by the action
fn submit(state: &mut AppState) -> RequestId {
    let result = update(state, Message::Submit);
    match result.action {
        Some(UpdateAction::FetchProfile { request_id, .. }) => request_id,
        other => panic!("expected FetchProfile action, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_escape_key_produces_quit_message() {
    let state = AppState::new();

    let result = handle_key(&state, InputKey::Esc);

    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let mut state = AppState::new();
    state.form.focus = FormField::Username;

    let result = handle_key(&state, InputKey::CharCtrl('c'));

    assert!(matches!(result, Some(Message::Quit)));
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_key_produces_submit() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::Submit)
    ));
}

#[test]
fn test_q_types_into_username_field() {
    let mut state = AppState::new();
    state.form.focus = FormField::Username;

    let result = handle_key(&state, InputKey::Char('q'));

    assert!(matches!(result, Some(Message::UsernameInput('q'))));
}

#[test]
fn test_number_keys_select_platform() {
    let state = AppState::new();

    let result = handle_key(&state, InputKey::Char('2'));

    assert!(matches!(
        result,
        Some(Message::SelectPlatform(Platform::CodeChef))
    ));
}

#[test]
fn test_key_message_is_forwarded() {
    let mut state = AppState::new();
    state.form.focus = FormField::Username;

    let result = update(&mut state, Message::Key(InputKey::Char('a')));

    assert!(matches!(result.message, Some(Message::UsernameInput('a'))));
}

// ─────────────────────────────────────────────────────────
// Form input
// ─────────────────────────────────────────────────────────

#[test]
fn test_platform_cycling_starts_from_first() {
    let mut state = AppState::new();

    update(&mut state, Message::NextPlatform);
    assert_eq!(state.form.platform, Some(Platform::LeetCode));

    update(&mut state, Message::NextPlatform);
    assert_eq!(state.form.platform, Some(Platform::CodeChef));

    update(&mut state, Message::PreviousPlatform);
    update(&mut state, Message::PreviousPlatform);
    assert_eq!(state.form.platform, Some(Platform::CodeForces));
}

#[test]
fn test_previous_platform_from_none_picks_last() {
    let mut state = AppState::new();

    update(&mut state, Message::PreviousPlatform);

    assert_eq!(state.form.platform, Some(Platform::CodeForces));
}

#[test]
fn test_username_editing() {
    let mut state = AppState::new();

    for c in "alicex".chars() {
        update(&mut state, Message::UsernameInput(c));
    }
    update(&mut state, Message::UsernameBackspace);
    assert_eq!(state.form.username, "alice");

    update(&mut state, Message::UsernameClear);
    assert!(state.form.username.is_empty());

    update(&mut state, Message::SetUsername("bob".to_string()));
    assert_eq!(state.form.username, "bob");
}

#[test]
fn test_focus_cycle_skips_chart_without_slices() {
    let mut state = AppState::new();
    assert_eq!(state.form.focus, FormField::Platform);

    update(&mut state, Message::FocusNext);
    assert_eq!(state.form.focus, FormField::Username);
    update(&mut state, Message::FocusNext);
    assert_eq!(state.form.focus, FormField::Submit);
    update(&mut state, Message::FocusNext);
    assert_eq!(state.form.focus, FormField::Platform);

    update(&mut state, Message::FocusPrevious);
    assert_eq!(state.form.focus, FormField::Submit);
}

#[test]
fn test_focus_cycle_includes_chart_with_slices() {
    let mut state = filled_state();
    let id = submit(&mut state);
    update(
        &mut state,
        Message::ProfileFetched {
            request_id: id,
            result: Ok(alice_stats()),
        },
    );
    state.form.focus = FormField::Submit;

    update(&mut state, Message::FocusNext);

    assert_eq!(state.form.focus, FormField::Chart);
}

// ─────────────────────────────────────────────────────────
// Submit
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_is_noop_with_empty_fields() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_none());
    assert!(!state.profile.loading);

    state.form.platform = Some(Platform::LeetCode);
    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_none());

    state.form.platform = None;
    state.form.username = "alice".to_string();
    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_none());
}

#[test]
fn test_submit_sets_loading_and_clears_previous_results() {
    let mut state = filled_state();
    state.profile = state.profile.failed("old error");

    let result = update(&mut state, Message::Submit);

    assert!(state.profile.loading);
    assert!(state.profile.stats.is_none());
    assert!(state.profile.error.is_none());
    assert_eq!(state.stats_view(), StatsView::Loading);
    match result.action {
        Some(UpdateAction::FetchProfile { query, .. }) => {
            assert_eq!(query.platform(), Platform::LeetCode);
            assert_eq!(query.username(), "alice");
        }
        other => panic!("expected FetchProfile, got {:?}", other),
    }
}

#[test]
fn test_submit_ignored_while_loading() {
    let mut state = filled_state();
    submit(&mut state);

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert_eq!(state.pending_requests, 1);
}

#[test]
fn test_whitespace_username_is_submitted_as_typed() {
    let mut state = AppState::new();
    state.form.platform = Some(Platform::CodeForces);
    state.form.username = "  ".to_string();

    let result = update(&mut state, Message::Submit);

    match result.action {
        Some(UpdateAction::FetchProfile { query, .. }) => assert_eq!(query.username(), "  "),
        other => panic!("expected FetchProfile, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Fetch results
// ─────────────────────────────────────────────────────────

#[test]
fn test_success_clears_loading_and_shows_chart() {
    let mut state = filled_state();
    let id = submit(&mut state);

    update(
        &mut state,
        Message::ProfileFetched {
            request_id: id,
            result: Ok(alice_stats()),
        },
    );

    assert!(!state.profile.loading);
    assert_eq!(state.pending_requests, 0);
    let StatsView::Summary(summary) = state.stats_view() else {
        panic!("expected summary");
    };
    assert_eq!(summary.title, "Leetcode Profile Stats");
    assert_eq!(summary.slices.len(), 2);
    assert_eq!(summary.slices[0].percent_label(), "66.7");
    assert_eq!(summary.slices[1].percent_label(), "33.3");
}

#[test]
fn test_failure_clears_loading_and_shows_only_error() {
    let mut state = filled_state();
    let id = submit(&mut state);

    update(
        &mut state,
        Message::ProfileFetched {
            request_id: id,
            result: Err("User not found".to_string()),
        },
    );

    assert!(!state.profile.loading);
    assert_eq!(
        state.stats_view(),
        StatsView::Error("User not found".to_string())
    );
}

#[test]
fn test_stale_response_is_discarded_by_default() {
    let mut state = filled_state();
    let first = state.begin_request();
    let second = state.begin_request();
    state.profile = state.profile.submit_started();

    // Older request resolves first: ignored, still loading
    update(
        &mut state,
        Message::ProfileFetched {
            request_id: first,
            result: Ok(bob_stats()),
        },
    );
    assert!(state.profile.loading);

    update(
        &mut state,
        Message::ProfileFetched {
            request_id: second,
            result: Ok(alice_stats()),
        },
    );
    assert!(!state.profile.loading);

    // Older request resolves last: still ignored
    let third = state.begin_request();
    update(
        &mut state,
        Message::ProfileFetched {
            request_id: first,
            result: Err("late".to_string()),
        },
    );
    assert!(state.profile.error.is_none());
    assert_eq!(
        state.profile.stats.as_ref().map(|s| s.username_display()),
        Some("alice".to_string())
    );
    assert_eq!(state.latest_request, Some(third));
}

#[test]
fn test_last_write_wins_when_guard_disabled() {
    let mut state = filled_state();
    state.settings.behavior.discard_stale_responses = false;
    let first = state.begin_request();
    let second = state.begin_request();
    state.profile = state.profile.submit_started();

    update(
        &mut state,
        Message::ProfileFetched {
            request_id: second,
            result: Ok(alice_stats()),
        },
    );
    update(
        &mut state,
        Message::ProfileFetched {
            request_id: first,
            result: Ok(bob_stats()),
        },
    );

    assert!(!state.profile.loading);
    assert_eq!(
        state.profile.stats.as_ref().map(|s| s.username_display()),
        Some("bob".to_string())
    );
}

#[test]
fn test_fetch_result_drops_chart_focus_when_no_slices() {
    let mut state = filled_state();
    state.settings.behavior.discard_stale_responses = false;
    let id = state.begin_request();
    state.profile = state.profile.succeeded(alice_stats());
    state.form.focus = FormField::Chart;

    update(
        &mut state,
        Message::ProfileFetched {
            request_id: id,
            result: Err("boom".to_string()),
        },
    );

    assert_eq!(state.form.focus, FormField::Platform);
}

// ─────────────────────────────────────────────────────────
// Legend selection and tick
// ─────────────────────────────────────────────────────────

#[test]
fn test_slice_selection_wraps() {
    let mut state = filled_state();
    let id = submit(&mut state);
    update(
        &mut state,
        Message::ProfileFetched {
            request_id: id,
            result: Ok(alice_stats()),
        },
    );

    update(&mut state, Message::SelectNextSlice);
    assert_eq!(state.selected_slice, Some(0));
    update(&mut state, Message::SelectNextSlice);
    assert_eq!(state.selected_slice, Some(1));
    update(&mut state, Message::SelectNextSlice);
    assert_eq!(state.selected_slice, Some(0));
    update(&mut state, Message::SelectPreviousSlice);
    assert_eq!(state.selected_slice, Some(1));
}

#[test]
fn test_slice_selection_without_chart_is_noop() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectNextSlice);
    assert_eq!(state.selected_slice, None);
}

#[test]
fn test_tick_advances_spinner_only_while_loading() {
    let mut state = filled_state();
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);

    submit(&mut state);
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 2);
}
