//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;
use url::Url;
use userdeck_api::UserClient;
use userdeck_app::{build_state, process, signals, Launch, Message, PrefsStore};
use userdeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application until quit.
pub async fn run(launch: Launch, mut prefs: Box<dyn PrefsStore>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let base = Url::parse(&launch.settings.base_url)
        .map_err(|_| Error::invalid_base_url(&launch.settings.base_url))?;
    let client = UserClient::new(base)
        .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

    let mut term = ratatui::init();

    // Build initial state and kick off the first fetch
    let (mut state, initial) = build_state(&launch, prefs.as_ref());

    // Unified message channel: background fetches and the signal
    // handler feed back into the same loop as key events.
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    process::process_message(&mut state, initial, &msg_tx, &client, prefs.as_mut());

    let result = run_loop(
        &mut term,
        &mut state,
        &mut msg_rx,
        &msg_tx,
        &client,
        prefs.as_mut(),
    );

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut userdeck_app::AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    client: &UserClient,
    prefs: &mut dyn PrefsStore,
) -> Result<()> {
    while !state.should_quit() {
        // Drain messages from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, msg_tx, client, prefs);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (a timeout yields a tick)
        if let Some(message) = event::poll()? {
            process::process_message(state, message, msg_tx, client, prefs);
        }
    }

    info!("Event loop finished, shutting down");
    Ok(())
}
