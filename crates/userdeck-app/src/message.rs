//! Message types for the application (TEA pattern)

use userdeck_core::User;

use crate::input_key::InputKey;
use crate::state::ViewMode;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Tick event for periodic updates (debounce poll, spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // List screen
    // ─────────────────────────────────────────────────────────
    /// Kick off (or retry) a full user fetch
    LoadUsers,
    /// Background fetch of the full user set finished
    UsersLoaded {
        generation: u64,
        result: Result<Vec<User>, String>,
    },
    /// The debounced search term settled on a new value
    SearchCommitted { term: String },
    /// Switch between table and card layout
    ToggleView(ViewMode),

    // ─────────────────────────────────────────────────────────
    // Detail screen
    // ─────────────────────────────────────────────────────────
    /// Navigate to the detail screen for a user
    OpenDetail { id: u64 },
    /// Background fetch of a single user finished
    UserLoaded {
        generation: u64,
        result: Result<User, String>,
    },
    /// Navigate back from detail to the list
    GoBack,
}
