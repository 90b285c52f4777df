//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use codecracker_client::ProfileSource;
use codecracker_core::Query;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::RequestId;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: Arc<S>)
where
    S: ProfileSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchProfile { request_id, query } => {
            spawn_profile_fetch(source, request_id, query, msg_tx);
        }
    }
}

/// Fetch one profile in the background.
///
/// The task always sends exactly one `Message::ProfileFetched`, so the
/// loading flag of a finished request is always cleared.
pub fn spawn_profile_fetch<S>(
    source: Arc<S>,
    request_id: RequestId,
    query: Query,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()>
where
    S: ProfileSource + Sync + 'static,
{
    tokio::spawn(async move {
        let result = match source.fetch_profile(&query).await {
            Ok(stats) => Ok(stats),
            Err(e) => {
                if e.is_fetch_error() {
                    warn!(
                        "Profile fetch {} for {}/{} failed: {}",
                        request_id,
                        query.platform(),
                        query.username(),
                        e
                    );
                } else {
                    error!("Profile fetch {} failed unexpectedly: {:?}", request_id, e);
                }
                Err(e.user_message())
            }
        };

        if msg_tx
            .send(Message::ProfileFetched { request_id, result })
            .await
            .is_err()
        {
            debug!("Message channel closed before request {} finished", request_id);
        }
    })
}
