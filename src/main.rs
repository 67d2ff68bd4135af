//! userdeck - A TUI for browsing a REST user directory
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates.

use std::path::PathBuf;

use clap::Parser;
use url::Url;
use userdeck_app::settings::load_settings;
use userdeck_app::{FilePrefs, Launch, ViewMode};
use userdeck_core::prelude::*;

/// userdeck - browse a REST user directory from the terminal
#[derive(Parser, Debug)]
#[command(name = "userdeck")]
#[command(about = "A TUI for browsing a REST user directory", long_about = None)]
struct Args {
    /// Starting location, e.g. "/" or "/user/3?search=le"
    #[arg(value_name = "LOCATION")]
    location: Option<String>,

    /// Initial search term (overrides the location's search parameter)
    #[arg(long, value_name = "TERM")]
    search: Option<String>,

    /// List layout (overrides the stored preference)
    #[arg(long, value_parser = ["table", "card"])]
    view: Option<String>,

    /// Base URL of the user directory API
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to an alternative config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    userdeck_core::logging::init()?;

    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(url) = args.base_url {
        settings.base_url = url;
    }
    // Validate before the terminal goes into raw mode, so a bad URL
    // fails with a plain error message.
    Url::parse(&settings.base_url)
        .map_err(|_| Error::invalid_base_url(&settings.base_url))?;

    info!("userdeck starting");
    info!("Base URL: {}", settings.base_url);

    let prefs = FilePrefs::open(&FilePrefs::default_dir());

    let launch = Launch {
        settings,
        location: args.location.unwrap_or_else(|| "/".to_string()),
        search: args.search,
        view: args.view.as_deref().map(|v| match v {
            "card" => ViewMode::Card,
            _ => ViewMode::Table,
        }),
    };

    let result = userdeck_tui::run(launch, Box::new(prefs)).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("userdeck exiting");
    result
}
