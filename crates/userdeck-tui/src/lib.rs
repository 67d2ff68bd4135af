//! userdeck-tui - Terminal presentation layer for userdeck
//!
//! Organized into focused submodules:
//!
//! - `runner`: Main entry point and event loop
//! - `event`: Terminal event polling and key translation
//! - `render`: Frame rendering (View in TEA pattern)
//! - `terminal`: Terminal setup/restore
//! - `theme`: Colors and semantic styles
//! - `widgets`: Reusable UI components

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
