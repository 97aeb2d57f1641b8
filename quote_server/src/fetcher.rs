//! Bounded fetch of the USD/BRL quote from the upstream API.
//!
//! One GET per call, no retry. The whole exchange (DNS, connect, TLS, headers and
//! body) shares a single deadline; an expiry is reported as `QuoteError::Timeout`,
//! any other network failure as `QuoteError::Transport` and an unreadable body as
//! `QuoteError::Decode`.
use std::time::Duration;

use log::debug;
use quote_common::{PriceQuote, QuoteError, Result, UpstreamPayload};
use reqwest::Client;

/// Operation name reported in timeout errors.
const OPERATION: &str = "upstream fetch";

/// HTTP client bound to a single upstream URL and time budget.
pub struct QuoteFetcher {
    client: Client,
    url: String,
    timeout: Duration,
}

impl QuoteFetcher {
    /// Build a fetcher for `url`, aborting each call after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    /// Upstream URL this fetcher targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the current quote.
    pub async fn fetch(&self) -> Result<PriceQuote> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        debug!("Upstream answered {} from {}", response.status(), self.url);

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let payload = UpstreamPayload::from_slice(&body)?;
        Ok(payload.into_quote())
    }

    fn classify(&self, err: reqwest::Error) -> QuoteError {
        if err.is_timeout() {
            QuoteError::Timeout {
                operation: OPERATION,
                limit_ms: self.timeout.as_millis(),
            }
        } else {
            QuoteError::Transport(err.to_string())
        }
    }
}
