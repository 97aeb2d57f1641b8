//! Quote service binary.
//!
//! Opens the quote store, makes sure the table exists, and serves `/cotacao` until
//! Ctrl+C. See the library crate for the request chain.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --port 8080 --database ./dollar_real.db
//! ```
#![warn(missing_docs)]
mod args;

use std::sync::Arc;

use clap::Parser;
use log::info;
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::net::{UPSTREAM_TIMEOUT, addr};
use quote_server::{AppState, QuoteFetcher, QuoteStore, SqliteQuoteStore, create_router};
use tokio::net::TcpListener;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let store = SqliteQuoteStore::open(&args.database).await?;
    store.init_schema().await?;
    info!(
        "Quote store ready at {} ({} stored quotes)",
        args.database.display(),
        store.count().await?
    );

    let fetcher = QuoteFetcher::new(args.upstream_url, UPSTREAM_TIMEOUT)?;
    info!("Upstream: {}", fetcher.url());
    let state = AppState::new(fetcher, Arc::new(store));

    let listener = TcpListener::bind(addr("0.0.0.0", args.port)).await?;
    info!("Quote service listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Ctrl+C received. Shutting down server...");
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
