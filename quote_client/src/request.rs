//! Bounded request for the current bid.
//!
//! One GET against the quote service with a single deadline covering connect,
//! headers and body. A non-success answer is reported with its status and raw body
//! rather than being decoded.
use std::time::Duration;

use log::debug;
use quote_common::{BidResponse, QuoteError, Result};
use reqwest::Client;

/// Operation name reported in timeout errors.
const OPERATION: &str = "quote request";

/// Fetch the bid from the service at `url`, aborting after `timeout`.
pub async fn fetch_bid(url: &str, timeout: Duration) -> Result<BidResponse> {
    let classify = |err: reqwest::Error| {
        if err.is_timeout() {
            QuoteError::Timeout {
                operation: OPERATION,
                limit_ms: timeout.as_millis(),
            }
        } else {
            QuoteError::Transport(err.to_string())
        }
    };

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| QuoteError::Transport(format!("Failed to create HTTP client: {}", e)))?;

    let response = client.get(url).send().await.map_err(classify)?;
    let status = response.status();
    let body = response.bytes().await.map_err(classify)?;
    debug!("Service answered {} ({} bytes)", status, body.len());

    if !status.is_success() {
        return Err(QuoteError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
