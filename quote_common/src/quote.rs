//! Quote payloads exchanged along the chain.
//!
//! The upstream API answers with an envelope keyed by the currency pair, holding a
//! `PriceQuote` whose fields are all strings. Values are carried exactly as received;
//! nothing is parsed as a number. Only the bid crosses the service/client boundary,
//! as a `BidResponse`.
use serde::{Deserialize, Serialize};

/// USD/BRL price record as returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Base currency code (e.g., `USD`).
    pub code: String,
    /// Quote currency code (e.g., `BRL`).
    pub codein: String,
    /// Human-readable pair name.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute bid variation.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percentage change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Buy price.
    pub bid: String,
    /// Sell price.
    pub ask: String,
    /// Upstream timestamp, seconds since the UNIX epoch as text.
    pub timestamp: String,
    /// Upstream creation date as text.
    pub create_date: String,
}

/// Upstream response envelope, keyed by the currency pair.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPayload {
    /// The USD/BRL record.
    #[serde(rename = "USDBRL")]
    pub usdbrl: PriceQuote,
}

impl UpstreamPayload {
    /// Decode an upstream body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Unwrap the envelope.
    pub fn into_quote(self) -> PriceQuote {
        self.usdbrl
    }
}

/// The body returned by the quote service: the bid and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    /// Buy price, passed through untouched.
    pub bid: String,
}

impl BidResponse {
    /// Text written to the client's output file.
    pub fn line(&self) -> String {
        format!("Dólar: {}", self.bid)
    }
}

impl From<&PriceQuote> for BidResponse {
    fn from(quote: &PriceQuote) -> Self {
        BidResponse {
            bid: quote.bid.clone(),
        }
    }
}
