//! Error types shared between the quote service and the quote client.
//!
//! The `QuoteError` enum unifies every failure along the chain: the bounded calls
//! (upstream fetch, insert, client request), JSON decoding, storage and local file
//! output. Both binaries propagate this single type with `?`.
use std::io;

use thiserror::Error;

/// Unified error type shared by service and client.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A bounded call did not complete before its deadline.
    #[error("{operation} timed out after {limit_ms}ms")]
    Timeout {
        /// Short name of the aborted operation (e.g. `upstream fetch`).
        operation: &'static str,
        /// Budget that was exceeded, in milliseconds.
        limit_ms: u128,
    },

    /// DNS, connect, TLS or body-read failure on an HTTP call.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failure while decoding a JSON payload via serde_json.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Prepare/exec failure or schema mismatch in the quote store.
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error originating from the standard library (files, sockets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A spawned request task panicked or was cancelled.
    #[error("Request task failed: {0}")]
    Task(String),

    /// The quote service answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl QuoteError {
    /// Returns `true` when the failure was a deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout { .. })
    }
}
