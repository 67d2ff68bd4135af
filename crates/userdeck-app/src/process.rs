//! Message processing loop (TEA)
//!
//! Drains a message and all of its follow-ups through the update
//! function, dispatching any actions along the way.

use tokio::sync::mpsc;
use userdeck_api::UserClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::prefs::PrefsStore;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &UserClient,
    prefs: &mut dyn PrefsStore,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client, prefs);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
