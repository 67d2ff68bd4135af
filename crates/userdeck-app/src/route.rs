//! Route table and in-app location.
//!
//! Two real routes plus a catch-all: `/` is the user list, `/user/{id}`
//! is the detail screen, anything else redirects to the list. The router
//! also owns the query string; the active search term round-trips
//! through the `search` parameter and survives list ↔ detail navigation.

use std::collections::BTreeMap;

/// Query parameter carrying the active search term.
pub const SEARCH_PARAM: &str = "search";

/// The two navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Detail(u64),
}

impl Route {
    /// Map a path to a route. Unknown paths (including `/user/` with a
    /// non-numeric id) fall through to the list, mirroring a catch-all
    /// redirect entry.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Route::List,
            (Some("user"), Some(id), None) => match id.parse::<u64>() {
                Ok(id) => Route::Detail(id),
                Err(_) => Route::List,
            },
            _ => Route::List,
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/user/{id}"),
        }
    }
}

/// Current route plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Router {
    route: Route,
    query: BTreeMap<String, String>,
}

impl Router {
    /// Parse a location string like `/user/3?search=le`.
    pub fn parse(location: &str) -> Self {
        let (path, query_str) = location.split_once('?').unwrap_or((location, ""));
        let query = url::form_urlencoded::parse(query_str.as_bytes())
            .into_owned()
            .collect();
        Self {
            route: Route::parse(path),
            query,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Look up a query parameter.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Merge one query parameter into the existing set. `None` removes
    /// the parameter entirely.
    pub fn set_query(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.query.insert(key.to_string(), v.to_string());
            }
            None => {
                self.query.remove(key);
            }
        }
    }

    /// Navigate to the detail route, preserving query parameters.
    pub fn go_to_detail(&mut self, id: u64) {
        self.route = Route::Detail(id);
    }

    /// Navigate back to the list, preserving query parameters.
    pub fn go_back(&mut self) {
        self.route = Route::List;
    }

    /// Serialize back to a location string.
    pub fn location(&self) -> String {
        let path = self.route.path();
        if self.query.is_empty() {
            return path;
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{path}?{query}")
    }
}
