//! The `User` entity as returned by the remote directory.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record fetched from the remote source.
///
/// Only the identifier, display name, and email are interpreted by the
/// application. Whatever else the remote returns (username, phone,
/// nested address/company objects, ...) is carried in `extra` as opaque
/// pass-through and re-serialized unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create a user with no extra fields (mostly for tests).
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Look up a string-valued extra field by key.
    ///
    /// Non-string values (nested objects, numbers) return `None`; the
    /// detail screen only surfaces flat string extras like `username`,
    /// `phone`, and `website`.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// Case-insensitive substring match against name or email.
    ///
    /// The term is trimmed and lower-cased before matching, so an empty
    /// or whitespace-only term matches every user.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leanne() -> User {
        User::new(1, "Leanne Graham", "Sincere@april.biz")
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        assert!(leanne().matches("LEANNE"));
        assert!(leanne().matches("anne gra"));
    }

    #[test]
    fn test_matches_email_case_insensitive() {
        assert!(leanne().matches("sincere@"));
        assert!(leanne().matches("APRIL.BIZ"));
    }

    #[test]
    fn test_matches_trims_term() {
        assert!(leanne().matches("  leanne  "));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(leanne().matches(""));
        assert!(leanne().matches("   "));
    }

    #[test]
    fn test_no_match() {
        assert!(!leanne().matches("ervin"));
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let body = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" }
        }"#;
        let user: User = serde_json::from_str(body).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.extra_str("username"), Some("Bret"));
        // Nested objects are preserved but not exposed as strings
        assert!(user.extra.contains_key("address"));
        assert_eq!(user.extra_str("address"), None);

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["address"]["city"], "Gwenborough");
    }
}
