//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the two screens and input modes
//! - `list`: List screen handlers (load, search, paging, view toggle)
//! - `detail`: Detail screen handlers

pub mod detail;
pub mod keys;
pub mod list;
pub mod update;


use crate::message::Message;
use crate::state::ViewMode;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the full user set in the background
    FetchUsers { generation: u64 },

    /// Fetch a single user in the background
    FetchUser { id: u64, generation: u64 },

    /// Persist the chosen list layout to the preference store
    PersistViewMode(ViewMode),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
