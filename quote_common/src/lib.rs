//!
//! Common types and utilities shared by the quote service and client.
//!
//! This crate aggregates:
//! - `quote` — the upstream price record and the bid exposed to the client.
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `net` — fixed endpoints and time budgets.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::{BidResponse, PriceQuote, UpstreamPayload};
pub use result::Result;
