//! Command-line arguments for the quote service.
//!
//! Every flag defaults to the fixed value of the deployment, so running the binary
//! without arguments serves `:8080/cotacao` backed by `dollar_real.db`.
use std::path::PathBuf;

use clap::Parser;
use quote_common::net::{SERVICE_PORT, UPSTREAM_URL};
use quote_server::store::DATABASE_PATH;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TCP port to listen on.
    #[clap(long, default_value_t = SERVICE_PORT)]
    pub port: u16,

    /// SQLite database file; created if missing.
    #[clap(long, default_value = DATABASE_PATH)]
    pub database: PathBuf,

    /// Upstream quote API URL.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,
}
