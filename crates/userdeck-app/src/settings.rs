//! Settings parser for the userdeck config file.
//!
//! Read from `<config dir>/userdeck/config.toml`; every field has a
//! default, a broken file degrades to defaults with a warning.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use userdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the user directory API.
    pub base_url: String,
    /// Rows/cards shown per page (display slice only).
    pub page_size: usize,
    /// Quiet period for the search debounce, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Default config directory: `<config dir>/userdeck`.
pub fn config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("userdeck")
}

/// Load settings from the default location, or from an explicit path.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => config_dir().join(CONFIG_FILENAME),
    };

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}
