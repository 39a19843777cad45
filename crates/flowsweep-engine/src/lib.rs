//! Workflow engine REST client and process-instance sweeper.
//!
//! # Features
//! - Verb-based request primitives (GET/DELETE/POST/PUT) against a fixed base URL
//! - Optional TLS-verification bypass for engines behind self-signed certificates
//! - Optional HTTP or SOCKS5 proxying, degrading to a direct connection when the
//!   proxy address is unusable
//! - Raw-bytes and JSON-object response decoding
//! - One-shot list-then-terminate sweep with per-instance failure accounting

#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

use thiserror::Error;

pub mod connection;
pub mod models;
pub mod sweep;

pub use connection::{ConnectionConfig, EngineConnection, DEFAULT_BASE_PATH};
pub use models::{LinkData, ProcessInstance};
pub use sweep::{SweepDriver, SweepReport};

/// Errors surfaced by the transport client and the sweep driver.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request could not be constructed, sent, or its body read.
    #[error("transport error: {0}")]
    Transport(String),
    /// The engine answered with a non-success HTTP status.
    #[error("engine returned status {0}: {1}")]
    Status(u16, String),
    /// The response body does not match the requested JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
}
