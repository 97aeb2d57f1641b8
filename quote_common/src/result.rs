//! Result alias used across the workspace.
use crate::error::QuoteError;

/// `Result` with `QuoteError` as the default error type.
pub type Result<T, E = QuoteError> = std::result::Result<T, E>;
