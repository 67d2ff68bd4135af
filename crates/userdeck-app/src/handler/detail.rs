//! Detail screen handlers: navigation and single-user loads

use userdeck_core::prelude::*;
use userdeck_core::User;

use crate::message::Message;
use crate::route::SEARCH_PARAM;
use crate::state::{AppState, DetailState, InputMode, LoadPhase};

use super::{UpdateAction, UpdateResult};

/// Navigate to the detail screen for `id`.
///
/// Tears the list screen down: the debounce timer is cancelled so no
/// search reaction fires behind the detail view, and the fetched data is
/// dropped (it is re-fetched on the way back).
pub fn open(state: &mut AppState, id: u64) -> UpdateResult {
    state.input_mode = InputMode::Normal;
    state.list.debouncer.cancel();
    state.list.users.clear();
    state.list.filtered.clear();

    state.router.go_to_detail(id);

    let generation = state.next_generation();
    let mut detail = DetailState::new(id);
    detail.generation = generation;
    state.detail = Some(detail);

    debug!(id, generation, "Opening user detail");
    UpdateResult::action(UpdateAction::FetchUser { id, generation })
}

/// Apply a finished single-user fetch.
pub fn handle_user_loaded(
    state: &mut AppState,
    generation: u64,
    result: std::result::Result<User, String>,
) -> UpdateResult {
    let Some(detail) = state.detail.as_mut() else {
        debug!(generation, "User response arrived with no detail screen");
        return UpdateResult::none();
    };
    if generation != detail.generation {
        debug!(
            generation,
            current = detail.generation,
            "Dropping stale user response"
        );
        return UpdateResult::none();
    }

    detail.loading = false;
    match result {
        Ok(user) => {
            debug!(id = user.id, "User detail loaded");
            detail.user = Some(user);
        }
        Err(message) => {
            // Fetch failure and "no such user" render the same way.
            warn!(id = detail.user_id, "User load failed: {}", message);
            detail.user = None;
        }
    }
    UpdateResult::none()
}

/// Navigate back from detail to the list, restoring the search term
/// from the location.
pub fn go_back(state: &mut AppState) -> UpdateResult {
    state.detail = None;
    state.router.go_back();

    let term = state.router.query(SEARCH_PARAM).unwrap_or("").to_string();
    state.list.search_input = term.clone();
    // The restored term counts as already emitted; typing it back
    // unchanged must not retrigger a filter pass.
    state.list.debouncer.prime(term);
    state.list.phase = LoadPhase::Loading;

    UpdateResult::message(Message::LoadUsers)
}
