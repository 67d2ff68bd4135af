//! userdeck-api - HTTP data client for userdeck
//!
//! One-shot GET requests against the user directory endpoint. No retry,
//! no caching, no state between invocations; every failure surfaces as a
//! [`TransportError`].

pub mod client;
pub mod error;

pub use client::UserClient;
pub use error::TransportError;
