//! Key event handlers for the two screens and input modes

use std::time::Instant;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::Route;
use crate::state::{AppState, InputMode, LoadPhase, ViewMode};

/// Convert key events to messages based on the active screen and mode.
///
/// Navigation keys (selection, paging) mutate state directly; anything
/// with side effects beyond the current screen becomes a message.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere, including search input
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.route() {
        Route::List => match state.input_mode {
            InputMode::Search => handle_key_search(state, key),
            InputMode::Normal => handle_key_list(state, key),
        },
        Route::Detail(_) => handle_key_detail(key),
    }
}

/// List screen, normal mode.
fn handle_key_list(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/') => {
            state.input_mode = InputMode::Search;
            None
        }

        InputKey::Char('t') => Some(Message::ToggleView(ViewMode::Table)),
        InputKey::Char('c') => Some(Message::ToggleView(ViewMode::Card)),

        // Retry only makes sense from the error view
        InputKey::Char('r') if state.list.phase == LoadPhase::Error => Some(Message::LoadUsers),

        InputKey::Up | InputKey::Char('k') => {
            state.list.select_prev();
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            state.list.select_next();
            None
        }
        InputKey::Left | InputKey::Char('[') => {
            state.list.prev_page();
            None
        }
        InputKey::Right | InputKey::Char(']') => {
            state.list.next_page();
            None
        }

        InputKey::Enter => state
            .list
            .selected_user()
            .map(|user| Message::OpenDetail { id: user.id }),

        InputKey::Char('q') => Some(Message::Quit),

        _ => None,
    }
}

/// List screen, search input mode. Every edit restarts the debounce
/// window; the committed term arrives later via the tick poll.
fn handle_key_search(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => {
            state.input_mode = InputMode::Normal;
            None
        }
        InputKey::Char(c) => {
            state.list.search_input.push(c);
            let value = state.list.search_input.clone();
            state.list.debouncer.input(value, Instant::now());
            None
        }
        InputKey::Backspace => {
            state.list.search_input.pop();
            let value = state.list.search_input.clone();
            state.list.debouncer.input(value, Instant::now());
            None
        }
        _ => None,
    }
}

/// Detail screen.
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') | InputKey::Left => {
            Some(Message::GoBack)
        }
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
