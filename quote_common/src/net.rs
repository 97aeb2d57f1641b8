//! Fixed endpoints and time budgets shared by the service and the client.
//!
//! The values here are the defaults of the whole chain. Both binaries accept
//! command-line overrides for the addresses; the budgets are passed explicitly to
//! the library constructors so tests can shrink or widen them.
use std::time::Duration;

/// TCP port the quote service listens on.
pub const SERVICE_PORT: u16 = 8080;
/// The only route served by the quote service.
pub const QUOTE_ROUTE: &str = "/cotacao";
/// Where the client finds the quote service by default.
pub const DEFAULT_QUOTE_URL: &str = "http://localhost:8080/cotacao";
/// Third-party USD/BRL quote endpoint.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Budget for the whole upstream exchange (connect through body).
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(200);
/// Outer budget for the client's call to the service.
///
/// The server's inner budgets are 200ms (fetch) and 10ms (insert).
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// Helper to format an address like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Full URL of the quote route on a service reachable at `host:port`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_ROUTE)
}
