//! Quote Client — fetches the current USD/BRL bid from the quote service and writes
//! `Dólar: <bid>` to a local file.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! Any failure ends the process with a non-zero exit status and the error printed.
#![warn(missing_docs)]
mod args;

use clap::Parser;
use quote_client::{ClientConfig, run};
use quote_common::QuoteError;
use quote_common::Result;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let config = ClientConfig {
        server_url: args.server_url,
        output: args.output,
        ..ClientConfig::default()
    };

    run(&config).await.map(|_| ())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
