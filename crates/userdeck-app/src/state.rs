//! Application state (Model in TEA pattern)

use std::time::Duration;

use userdeck_core::User;

use crate::route::{Route, Router};
use crate::search::Debouncer;
use crate::settings::Settings;

/// Load cycle of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Error,
}

/// Display style for the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

impl ViewMode {
    /// Stored representation for the preference file.
    pub fn as_key(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Card => "card",
        }
    }

    /// Parse the stored representation; absent or unrecognized values
    /// fall back to the table layout.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("card") => ViewMode::Card,
            _ => ViewMode::Table,
        }
    }
}

/// Whether keystrokes go to the search box or to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

// ─────────────────────────────────────────────────────────────────────────────
// List screen
// ─────────────────────────────────────────────────────────────────────────────

/// State of the user list screen.
#[derive(Debug)]
pub struct ListState {
    pub phase: LoadPhase,
    /// Full set as fetched; never mutated by filtering.
    pub users: Vec<User>,
    /// Derived subset, recomputed on every accepted search term.
    pub filtered: Vec<User>,
    /// Current page, 1-based. Pagination is a display slice only.
    pub page: usize,
    pub page_size: usize,
    /// Selected row within the current page slice.
    pub selected: usize,
    pub view_mode: ViewMode,
    /// Live contents of the search box (pre-debounce).
    pub search_input: String,
    pub debouncer: Debouncer,
    /// Generation of the most recently dispatched fetch_all; responses
    /// from older generations are discarded.
    pub generation: u64,
    /// Message of the last failed load, for the error view.
    pub last_error: Option<String>,
}

impl ListState {
    pub fn new(page_size: usize, quiet: Duration) -> Self {
        Self {
            phase: LoadPhase::Loading,
            users: Vec::new(),
            filtered: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            selected: 0,
            view_mode: ViewMode::Table,
            search_input: String::new(),
            debouncer: Debouncer::new(quiet),
            generation: 0,
            last_error: None,
        }
    }

    /// Recompute the filtered subset and reset to page 1.
    pub fn apply_filter(&mut self, term: &str) {
        self.filtered = self.users.iter().filter(|u| u.matches(term)).cloned().collect();
        self.page = 1;
        self.selected = 0;
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    /// The slice of the filtered set shown on the current page.
    pub fn page_slice(&self) -> &[User] {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        if start >= self.filtered.len() {
            &[]
        } else {
            &self.filtered[start..end]
        }
    }

    pub fn next_page(&mut self) {
        if self.page < self.page_count() {
            self.page += 1;
            self.clamp_selection();
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.clamp_selection();
        }
    }

    pub fn select_next(&mut self) {
        let len = self.page_slice().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.page_slice().get(self.selected)
    }

    fn clamp_selection(&mut self) {
        let len = self.page_slice().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail screen
// ─────────────────────────────────────────────────────────────────────────────

/// State of the user detail screen.
///
/// `loading == false && user.is_none()` is a real renderable state
/// ("finished loading, no user"), distinct from the loading state.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub user_id: u64,
    pub loading: bool,
    pub user: Option<User>,
    /// Generation of the most recently dispatched fetch_one.
    pub generation: u64,
}

impl DetailState {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            loading: true,
            user: None,
            generation: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Top-level state
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    pub router: Router,
    pub list: ListState,
    /// Present only while the detail route is active.
    pub detail: Option<DetailState>,
    pub input_mode: InputMode,
    pub quitting: bool,
    /// Loading spinner animation frame, advanced on tick.
    pub spinner_frame: usize,
    fetch_seq: u64,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            router: Router::default(),
            list: ListState::new(settings.page_size, Duration::from_millis(settings.debounce_ms)),
            detail: None,
            input_mode: InputMode::Normal,
            quitting: false,
            spinner_frame: 0,
            fetch_seq: 0,
        }
    }

    /// Hand out the next fetch generation. One shared monotonic counter
    /// fences both list and detail fetches.
    pub fn next_generation(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Which screen is active, straight from the route table.
    pub fn route(&self) -> Route {
        self.router.route()
    }
}
