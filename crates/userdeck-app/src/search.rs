//! Quiet-period debounce with equality-gated emission.
//!
//! The search box produces a raw stream of text values; the list screen
//! only reacts to a value once no further keystroke has arrived for the
//! quiet period, and only if it differs from the last value that was
//! actually emitted. Built as a timer-plus-last-value primitive so the
//! event loop can drive it from its tick and tests can drive it with
//! fabricated instants.

use std::time::{Duration, Instant};

/// Default quiet period between the last keystroke and the reaction.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
    last_emitted: Option<String>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_emitted: None,
        }
    }

    /// Record a new raw value. Each call restarts the quiet period.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some((value.into(), now + self.quiet));
    }

    /// Emit the pending value if its quiet period has elapsed and it
    /// differs from the last emitted value. Duplicate values are
    /// swallowed but still consume the pending slot.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => {}
            _ => return None,
        }

        let (value, _) = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(value.as_str()) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }

    /// Seed the "last emitted" value without emitting, so an initial
    /// term (e.g. read from the location on activation) is not
    /// re-emitted when the user types it back unchanged.
    pub fn prime(&mut self, value: impl Into<String>) {
        self.last_emitted = Some(value.into());
    }

    /// Drop any pending value. Used on screen teardown so no reaction
    /// fires after the list screen is gone.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}
