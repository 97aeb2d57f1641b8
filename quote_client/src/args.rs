//! Command-line arguments for the Quote Client.
//!
//! Both flags default to the fixed deployment values; see `main` for usage.
use std::path::PathBuf;

use clap::Parser;
use quote_client::output::OUTPUT_PATH;
use quote_common::net::DEFAULT_QUOTE_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the quote service route.
    #[clap(long, default_value = DEFAULT_QUOTE_URL)]
    pub server_url: String,

    /// File the quote line is written to (overwritten on success).
    #[clap(long, default_value = OUTPUT_PATH)]
    pub output: PathBuf,
}
