//! Terminal lifecycle helpers

/// Chain a panic hook that leaves raw mode before the panic message
/// prints, so it lands on a usable screen instead of a ratatui frame.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
