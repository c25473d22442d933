// src/error.rs
//! Error type for feed ingestion.
//!
//! Malformed *data* never errors — the parser and aggregators degrade
//! row by row. Only the transport layer can fail a cycle.

use thiserror::Error;

/// Errors that can occur while fetching the feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// Server answered with a non-success status
    #[error("HTTP {0}")]
    Http(u16),

    /// Connection, TLS or timeout failure from the HTTP client
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
