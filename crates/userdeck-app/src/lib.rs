//! userdeck-app - Application state and orchestration for userdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the route table, the list/detail screen state, the search
//! debounce pipeline, the view-mode preference store, configuration
//! loading, and background fetch dispatch.

pub mod actions;
pub mod handler;
pub mod input_key;
pub mod launch;
pub mod message;
pub mod prefs;
pub mod process;
pub mod route;
pub mod search;
pub mod settings;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use launch::{build_state, Launch};
pub use message::Message;
pub use prefs::{FilePrefs, MemoryPrefs, PrefsStore, VIEW_KEY};
pub use route::{Route, Router};
pub use settings::Settings;
pub use state::{AppState, DetailState, InputMode, ListState, LoadPhase, ViewMode};
