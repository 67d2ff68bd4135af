//! userdeck-core - Core domain types for userdeck
//!
//! Holds the `User` entity, the shared application error type, and the
//! logging bootstrap. Everything above this crate (API client, app state
//! machine, TUI) depends on these types.

pub mod error;
pub mod logging;
pub mod prelude;
pub mod user;

pub use error::{Error, Result};
pub use user::User;
