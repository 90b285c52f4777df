//! Headless mode runner - one submission through the TEA loop, no TUI

use std::io::Write;
use std::sync::Arc;

use codecracker_app::config::Settings;
use codecracker_app::{
    process_message, signals, AppState, Message, StatsView, MESSAGE_CHANNEL_CAPACITY,
};
use codecracker_client::{ApiClient, ProfileSource};
use codecracker_core::prelude::*;
use codecracker_core::Platform;
use codecracker_tui::RunOptions;
use tokio::sync::mpsc;

use super::HeadlessEvent;

/// Submit once against the configured API and print NDJSON to stdout.
///
/// Returns `Ok(true)` when the profile loaded, `Ok(false)` when an error
/// event was emitted.
pub async fn run_headless(options: RunOptions) -> Result<bool> {
    info!("CodeCracker starting in HEADLESS mode");

    let client = match ApiClient::new(&options.base_url, options.settings.api.timeout()) {
        Ok(client) => client,
        Err(e) => {
            HeadlessEvent::error(e.user_message(), e.is_fatal()).emit();
            return Ok(false);
        }
    };

    let mut stdout = std::io::stdout();
    run_headless_with(
        Arc::new(client),
        options.settings,
        options.platform,
        options.username,
        &mut stdout,
    )
    .await
}

/// Headless run against any profile source, writing events to `out`
pub async fn run_headless_with<S, W>(
    source: Arc<S>,
    settings: Settings,
    platform: Option<Platform>,
    username: Option<String>,
    out: &mut W,
) -> Result<bool>
where
    S: ProfileSource + Sync + 'static,
    W: Write,
{
    let mut state = AppState::with_settings(settings);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

    if let Some(platform) = platform {
        process_message(&mut state, Message::SelectPlatform(platform), &msg_tx, &source);
    }
    if let Some(username) = username {
        process_message(&mut state, Message::SetUsername(username), &msg_tx, &source);
    }

    if !state.form.is_complete() {
        HeadlessEvent::error(
            "Both a platform and a username are required (--platform, --username)".to_string(),
            true,
        )
        .write_to(out);
        return Ok(false);
    }

    signals::spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::Submit, &msg_tx, &source);
    if let Some(request_id) = state.latest_request {
        HeadlessEvent::submit_started(
            state.form.platform.map(|p| p.as_str()).unwrap_or_default(),
            &state.form.username,
            request_id.value(),
        )
        .write_to(out);
    }

    while state.profile.loading && !state.should_quit() {
        match msg_rx.recv().await {
            Some(msg) => process_message(&mut state, msg, &msg_tx, &source),
            None => {
                warn!("Message channel closed");
                break;
            }
        }
    }

    let loaded = match state.stats_view() {
        StatsView::Summary(summary) => {
            HeadlessEvent::profile_loaded(&summary).write_to(out);
            true
        }
        StatsView::Error(message) => {
            HeadlessEvent::error(message, false).write_to(out);
            false
        }
        StatsView::Loading | StatsView::Empty => {
            HeadlessEvent::error("Interrupted before the profile loaded".to_string(), true)
                .write_to(out);
            false
        }
    };

    info!("CodeCracker headless mode exiting (loaded: {})", loaded);
    Ok(loaded)
}
