//! HTTP quote service.
//!
//! One route, `/cotacao`. Each request runs the same linear chain: fetch the
//! upstream quote, persist it, answer with the bid. The first failure ends the chain
//! with a 500 whose body is the raw error text. Every other path gets an empty 404.
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
};
use log::{debug, error, info};
use quote_common::net::QUOTE_ROUTE;
use quote_common::{BidResponse, QuoteError};

use crate::fetcher::QuoteFetcher;
use crate::store::{INSERT_TIMEOUT, QuoteStore, persist};

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<QuoteFetcher>,
    store: Arc<dyn QuoteStore>,
    insert_timeout: Duration,
}

impl AppState {
    /// Create state with the default insert budget.
    pub fn new(fetcher: QuoteFetcher, store: Arc<dyn QuoteStore>) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            store,
            insert_timeout: INSERT_TIMEOUT,
        }
    }

    /// Override the insert budget.
    pub fn with_insert_timeout(mut self, timeout: Duration) -> Self {
        self.insert_timeout = timeout;
        self
    }
}

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_ROUTE, any(get_quote))
        .fallback(not_found)
        .with_state(state)
}

async fn get_quote(State(state): State<AppState>) -> Result<Json<BidResponse>, ApiError> {
    // Runs detached so a client hanging up does not abort the fetch or the insert.
    let bid = tokio::spawn(fetch_and_persist(state))
        .await
        .map_err(|e| QuoteError::Task(e.to_string()))??;
    Ok(Json(bid))
}

async fn fetch_and_persist(state: AppState) -> Result<BidResponse, QuoteError> {
    let quote = state.fetcher.fetch().await?;
    persist(state.store.as_ref(), &quote, state.insert_timeout).await?;

    let bid = BidResponse::from(&quote);
    info!("Served {}/{} bid {}", quote.code, quote.codein, bid.bid);
    Ok(bid)
}

async fn not_found(uri: Uri) -> StatusCode {
    debug!("No route for {}", uri);
    StatusCode::NOT_FOUND
}

/// Maps any chain failure to a plain-text 500.
struct ApiError(QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Quote request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use quote_common::{PriceQuote, Result};
    use std::sync::Mutex;
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.46","low":"5.41","varBid":"0.01","pctChange":"0.2","bid":"5.43","ask":"5.44","timestamp":"1717171717","create_date":"2024-05-31 13:08:37"}}"#;

    #[derive(Default)]
    struct RecordingStore {
        rows: Mutex<Vec<PriceQuote>>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl QuoteStore for RecordingStore {
        async fn insert(&self, quote: &PriceQuote) -> Result<()> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.rows.lock().unwrap().push(quote.clone());
            Ok(())
        }

        async fn count(&self) -> Result<u64> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }
    }

    struct FailingStore;

    #[async_trait]
    impl QuoteStore for FailingStore {
        async fn insert(&self, _quote: &PriceQuote) -> Result<()> {
            Err(QuoteError::Storage("no such table: USDBRL".into()))
        }

        async fn count(&self) -> Result<u64> {
            Ok(0)
        }
    }

    async fn upstream(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn app_state(server: &MockServer, fetch_timeout: Duration, store: Arc<dyn QuoteStore>) -> AppState {
        let fetcher = QuoteFetcher::new(server.uri(), fetch_timeout).unwrap();
        AppState::new(fetcher, store)
    }

    async fn call(state: AppState, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_upstream_bid_and_stores_quote() {
        let server = upstream(ResponseTemplate::new(200).set_body_string(SAMPLE)).await;
        let store = Arc::new(RecordingStore::default());
        let state = app_state(&server, Duration::from_millis(500), store.clone())
            .with_insert_timeout(Duration::from_secs(1));

        let (status, content_type, body) = call(state, "/cotacao").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"bid":"5.43"}"#);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_paths_are_empty_not_found() {
        let server = upstream(ResponseTemplate::new(200).set_body_string(SAMPLE)).await;
        let store = Arc::new(RecordingStore::default());

        for uri in ["/", "/cotacao/extra", "/cotacoes", "/health"] {
            let state = app_state(&server, Duration::from_millis(500), store.clone());
            let (status, _, body) = call(state, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "uri {uri}");
            assert!(body.is_empty(), "uri {uri}");
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn upstream_timeout_is_server_error_without_insert() {
        let server = upstream(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE)
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let store = Arc::new(RecordingStore::default());
        let state = app_state(&server, Duration::from_millis(50), store.clone());

        let (status, _, body) = call(state, "/cotacao").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "upstream fetch timed out after 50ms");
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn malformed_upstream_body_is_server_error() {
        let server = upstream(ResponseTemplate::new(200).set_body_string("{\"USDBRL\":")).await;
        let store = Arc::new(RecordingStore::default());
        let state = app_state(&server, Duration::from_millis(500), store.clone());

        let (status, _, body) = call(state, "/cotacao").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("JSON decode error"), "body: {body}");
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn slow_insert_is_server_error() {
        let server = upstream(ResponseTemplate::new(200).set_body_string(SAMPLE)).await;
        let store = Arc::new(RecordingStore {
            rows: Mutex::new(Vec::new()),
            delay: Some(Duration::from_millis(200)),
        });
        let state = app_state(&server, Duration::from_millis(500), store);

        let (status, _, body) = call(state, "/cotacao").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "quote insert timed out after 10ms");
    }

    #[tokio::test]
    async fn storage_failure_text_is_returned() {
        let server = upstream(ResponseTemplate::new(200).set_body_string(SAMPLE)).await;
        let state = app_state(&server, Duration::from_millis(500), Arc::new(FailingStore));

        let (status, _, body) = call(state, "/cotacao").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Storage error: no such table: USDBRL");
    }
}
