//! USD/BRL quote service.
//!
//! The service exposes `GET /cotacao`. For every request it wires together three
//! building blocks:
//!
//! - `QuoteFetcher` — bounded GET against the upstream quote API (200ms budget).
//! - `QuoteStore` / `persist` — appends the fetched quote to the local SQLite store
//!   (10ms budget).
//! - `create_router` — the axum router that runs fetch then persist and answers with
//!   `{"bid": ...}`, or a plain-text 500 carrying the first error.
//!
//! Requests are independent. The only thing they share is the store handle, which is
//! opened once at startup and passed to the router as state. Nothing propagates
//! cancellation back from the client: a dropped connection does not stop an
//! in-flight fetch or insert.
#![warn(missing_docs)]
pub mod fetcher;
pub mod service;
pub mod store;

pub use fetcher::QuoteFetcher;
pub use service::{AppState, create_router};
pub use store::{QuoteStore, SqliteQuoteStore, persist};
