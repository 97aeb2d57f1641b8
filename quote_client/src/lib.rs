//! Quote client: asks the quote service for the current USD/BRL bid and writes it to
//! a local file.
//!
//! The whole exchange with the service is bounded by a single 300ms budget. Every
//! failure (timeout, transport, non-success status, decode, file create or write) is
//! returned from [`run`]; nothing is written unless a bid was received.
#![warn(missing_docs)]
pub mod output;
pub mod request;

use std::path::PathBuf;
use std::time::Duration;

use log::info;
use quote_common::net::{CLIENT_TIMEOUT, DEFAULT_QUOTE_URL};
use quote_common::{BidResponse, Result};

pub use output::write_quote;
pub use request::fetch_bid;

/// Where to ask for the bid and where to write it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the quote route.
    pub server_url: String,
    /// Output file, overwritten on success.
    pub output: PathBuf,
    /// Budget for the request to the service.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_QUOTE_URL.to_string(),
            output: PathBuf::from(output::OUTPUT_PATH),
            timeout: CLIENT_TIMEOUT,
        }
    }
}

/// Fetch the bid and write it to the configured file.
pub async fn run(config: &ClientConfig) -> Result<BidResponse> {
    info!("Requesting quote from {}", config.server_url);
    let bid = fetch_bid(&config.server_url, config.timeout).await?;
    info!("Received bid {}", bid.bid);

    write_quote(&config.output, &bid)?;
    info!("Quote written to {}", config.output.display());
    Ok(bid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_deployment() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, "http://localhost:8080/cotacao");
        assert_eq!(config.output, PathBuf::from("cotacao.txt"));
        assert_eq!(config.timeout, Duration::from_millis(300));
    }
}
