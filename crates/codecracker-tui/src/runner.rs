//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use codecracker_app::config::Settings;
use codecracker_app::{process_message, signals, AppState, Message, MESSAGE_CHANNEL_CAPACITY};
use codecracker_client::{ApiClient, ProfileSource};
use codecracker_core::prelude::*;
use codecracker_core::Platform;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Startup parameters for the interactive UI
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub settings: Settings,
    /// Resolved API base URL
    pub base_url: String,
    /// Prefill for the platform selector
    pub platform: Option<Platform>,
    /// Prefill for the username field
    pub username: Option<String>,
}

/// Run the interactive TUI until the user quits
pub async fn run(options: RunOptions) -> Result<()> {
    let client = ApiClient::new(&options.base_url, options.settings.api.timeout())?;
    info!("Using statistics API at {}", client.base_url());
    let source = Arc::new(client);

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(options.settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

    // Apply CLI prefill through the regular update path
    if let Some(platform) = options.platform {
        process_message(&mut state, Message::SelectPlatform(platform), &msg_tx, &source);
    }
    if let Some(username) = options.username {
        process_message(&mut state, Message::SetUsername(username), &msg_tx, &source);
    }

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, source);

    ratatui::restore();

    if state.pending_requests > 0 {
        debug!("Exiting with {} request(s) in flight", state.pending_requests);
    }

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
) -> Result<()>
where
    S: ProfileSource + Sync + 'static,
{
    while !state.should_quit() {
        // Process messages from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &source);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &source);
        }
    }

    Ok(())
}
