//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

use super::{detail, keys::handle_key, list, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quitting = true;
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
            state.spinner_frame = state.spinner_frame.wrapping_add(1);

            // The debounce timer only runs while the list screen is up;
            // teardown cancels any pending value before the detail
            // screen takes over.
            if state.route() == Route::List {
                if let Some(term) = state.list.debouncer.poll(Instant::now()) {
                    return UpdateResult::message(Message::SearchCommitted { term });
                }
            }
            UpdateResult::none()
        }

        Message::LoadUsers => list::begin_load(state),

        Message::UsersLoaded { generation, result } => {
            list::handle_users_loaded(state, generation, result)
        }

        Message::SearchCommitted { term } => list::handle_search_committed(state, term),

        Message::ToggleView(mode) => list::handle_toggle_view(state, mode),

        Message::OpenDetail { id } => detail::open(state, id),

        Message::UserLoaded { generation, result } => {
            detail::handle_user_loaded(state, generation, result)
        }

        Message::GoBack => detail::go_back(state),
    }
}
