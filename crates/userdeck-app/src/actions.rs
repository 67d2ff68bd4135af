//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use userdeck_api::UserClient;
use userdeck_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::prefs::{PrefsStore, VIEW_KEY};

/// Execute an action produced by the update function.
///
/// Fetches run as background tasks and report back through the message
/// channel; preference writes are quick enough to do inline.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: &UserClient,
    prefs: &mut dyn PrefsStore,
) {
    match action {
        UpdateAction::FetchUsers { generation } => {
            let client = client.clone();
            tokio::spawn(async move {
                let result = client.fetch_all().await.map_err(|e| e.to_string());
                if msg_tx
                    .send(Message::UsersLoaded { generation, result })
                    .await
                    .is_err()
                {
                    warn!("Message channel closed before user list response arrived");
                }
            });
        }

        UpdateAction::FetchUser { id, generation } => {
            let client = client.clone();
            tokio::spawn(async move {
                let result = client.fetch_one(id).await.map_err(|e| e.to_string());
                if msg_tx
                    .send(Message::UserLoaded { generation, result })
                    .await
                    .is_err()
                {
                    warn!("Message channel closed before user response arrived");
                }
            });
        }

        UpdateAction::PersistViewMode(mode) => {
            // A failed write only loses the preference, never the session
            if let Err(e) = prefs.set(VIEW_KEY, mode.as_key()) {
                warn!("Failed to persist view mode: {}", e);
            }
        }
    }
}
