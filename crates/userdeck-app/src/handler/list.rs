//! List screen handlers: loading, search, and view toggling

use userdeck_core::prelude::*;
use userdeck_core::User;

use crate::route::SEARCH_PARAM;
use crate::state::{AppState, LoadPhase, ViewMode};

use super::{UpdateAction, UpdateResult};

/// Start (or retry) a fetch of the full user set.
///
/// Stamps the list with a fresh generation so a response from any fetch
/// dispatched earlier is discarded when it eventually lands.
pub fn begin_load(state: &mut AppState) -> UpdateResult {
    let generation = state.next_generation();
    state.list.phase = LoadPhase::Loading;
    state.list.last_error = None;
    state.list.generation = generation;

    debug!(generation, "Loading user list");
    UpdateResult::action(UpdateAction::FetchUsers { generation })
}

/// Apply a finished list fetch.
pub fn handle_users_loaded(
    state: &mut AppState,
    generation: u64,
    result: std::result::Result<Vec<User>, String>,
) -> UpdateResult {
    if generation != state.list.generation {
        debug!(
            generation,
            current = state.list.generation,
            "Dropping stale user list response"
        );
        return UpdateResult::none();
    }

    match result {
        Ok(users) => {
            info!(count = users.len(), "User list loaded");
            state.list.users = users;
            // Retry and initial load share this path: whatever is in
            // the search box right now is the term that gets applied.
            let term = state.list.search_input.clone();
            state.list.apply_filter(&term);
            state.list.phase = LoadPhase::Loaded;
        }
        Err(message) => {
            warn!("User list load failed: {}", message);
            state.list.users.clear();
            state.list.filtered.clear();
            state.list.phase = LoadPhase::Error;
            state.list.last_error = Some(message);
        }
    }
    UpdateResult::none()
}

/// React to a debounced search term: sync the location and re-filter.
pub fn handle_search_committed(state: &mut AppState, term: String) -> UpdateResult {
    let param = if term.is_empty() {
        None
    } else {
        Some(term.as_str())
    };
    state.router.set_query(SEARCH_PARAM, param);
    state.list.apply_filter(&term);
    debug!(
        term = %term,
        matches = state.list.filtered.len(),
        "Search term applied"
    );
    UpdateResult::none()
}

/// Switch the list layout and persist the choice.
pub fn handle_toggle_view(state: &mut AppState, mode: ViewMode) -> UpdateResult {
    if state.list.view_mode == mode {
        return UpdateResult::none();
    }
    state.list.view_mode = mode;
    UpdateResult::action(UpdateAction::PersistViewMode(mode))
}
