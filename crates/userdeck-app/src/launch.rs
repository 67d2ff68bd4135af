//! Launch configuration: command line and config file merged into the
//! initial application state.

use crate::message::Message;
use crate::prefs::{PrefsStore, VIEW_KEY};
use crate::route::{Route, Router, SEARCH_PARAM};
use crate::settings::Settings;
use crate::state::{AppState, ViewMode};

/// Everything resolved before the event loop starts.
#[derive(Debug, Clone)]
pub struct Launch {
    pub settings: Settings,
    /// Starting location, e.g. `/` or `/user/3?search=le`.
    pub location: String,
    /// `--search` override; wins over the location's query parameter.
    pub search: Option<String>,
    /// `--view` override; wins over the stored preference.
    pub view: Option<ViewMode>,
}

impl Launch {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            location: "/".to_string(),
            search: None,
            view: None,
        }
    }
}

/// Build the initial state and the message that kicks off the first
/// fetch for whichever screen the location points at.
pub fn build_state(launch: &Launch, prefs: &dyn PrefsStore) -> (AppState, Message) {
    let mut state = AppState::new(&launch.settings);
    state.router = Router::parse(&launch.location);

    if let Some(term) = launch.search.as_deref() {
        let param = if term.is_empty() { None } else { Some(term) };
        state.router.set_query(SEARCH_PARAM, param);
    }

    // View mode: CLI override, then stored preference, then table
    state.list.view_mode = match launch.view {
        Some(mode) => mode,
        None => ViewMode::from_key(prefs.get(VIEW_KEY).as_deref()),
    };

    // Seed the search box from the location and mark the term as
    // already emitted so activation does not refire it.
    let term = state.router.query(SEARCH_PARAM).unwrap_or("").to_string();
    state.list.search_input = term.clone();
    state.list.debouncer.prime(term);

    let initial = match state.route() {
        Route::List => Message::LoadUsers,
        Route::Detail(id) => Message::OpenDetail { id },
    };
    (state, initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;

    fn launch(location: &str) -> Launch {
        Launch {
            settings: Settings::default(),
            location: location.to_string(),
            search: None,
            view: None,
        }
    }

    #[test]
    fn test_default_launch_loads_list() {
        let (state, initial) = build_state(&launch("/"), &MemoryPrefs::new());
        assert_eq!(state.route(), Route::List);
        assert_eq!(state.list.view_mode, ViewMode::Table);
        assert!(matches!(initial, Message::LoadUsers));
    }

    #[test]
    fn test_detail_location_opens_detail() {
        let (state, initial) = build_state(&launch("/user/4"), &MemoryPrefs::new());
        assert_eq!(state.route(), Route::Detail(4));
        assert!(matches!(initial, Message::OpenDetail { id: 4 }));
    }

    #[test]
    fn test_unknown_location_falls_back_to_list() {
        let (state, initial) = build_state(&launch("/nowhere"), &MemoryPrefs::new());
        assert_eq!(state.route(), Route::List);
        assert!(matches!(initial, Message::LoadUsers));
    }

    #[test]
    fn test_search_param_seeds_search_box() {
        let (state, _) = build_state(&launch("/?search=ervin"), &MemoryPrefs::new());
        assert_eq!(state.list.search_input, "ervin");
    }

    #[test]
    fn test_search_override_wins_over_location() {
        let mut l = launch("/?search=ervin");
        l.search = Some("leanne".to_string());
        let (state, _) = build_state(&l, &MemoryPrefs::new());
        assert_eq!(state.list.search_input, "leanne");
        assert_eq!(state.router.query("search"), Some("leanne"));
    }

    #[test]
    fn test_stored_view_preference_applies() {
        let mut prefs = MemoryPrefs::new();
        prefs.set(VIEW_KEY, "card").unwrap();

        let (state, _) = build_state(&launch("/"), &prefs);
        assert_eq!(state.list.view_mode, ViewMode::Card);
    }

    #[test]
    fn test_view_override_wins_over_preference() {
        let mut prefs = MemoryPrefs::new();
        prefs.set(VIEW_KEY, "card").unwrap();

        let mut l = launch("/");
        l.view = Some(ViewMode::Table);
        let (state, _) = build_state(&l, &prefs);
        assert_eq!(state.list.view_mode, ViewMode::Table);
    }
}
