//! Quote persistence.
//!
//! `QuoteStore` is the capability handed to request handlers; `SqliteQuoteStore` is the
//! production implementation backed by a local SQLite file. Rows are append-only and
//! nothing deduplicates them, so identical quotes fetched twice are stored twice.
//!
//! `persist` is the bounded entry point used by the service: it aborts the insert once
//! the budget has elapsed. An aborted insert is not rolled back by the caller; the
//! store's own locking decides whether it still lands.
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use quote_common::{PriceQuote, QuoteError, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Default database file, relative to the working directory.
pub const DATABASE_PATH: &str = "dollar_real.db";
/// Budget for a single insert.
pub const INSERT_TIMEOUT: Duration = Duration::from_millis(10);

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS USDBRL (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT,
        codein TEXT,
        name TEXT,
        high TEXT,
        low TEXT,
        var_bid TEXT,
        pct_change TEXT,
        bid TEXT,
        ask TEXT,
        timestamp TEXT,
        create_date TEXT
    )
"#;

const INSERT_QUOTE: &str = r#"
    INSERT INTO USDBRL (code, codein, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Append-only sink for fetched quotes.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Append one row for `quote`.
    async fn insert(&self, quote: &PriceQuote) -> Result<()>;

    /// Number of stored rows.
    async fn count(&self) -> Result<u64>;
}

/// Insert `quote` into `store`, failing with `QuoteError::Timeout` after `budget`.
pub async fn persist(store: &dyn QuoteStore, quote: &PriceQuote, budget: Duration) -> Result<()> {
    match tokio::time::timeout(budget, store.insert(quote)).await {
        Ok(result) => result,
        Err(_) => Err(QuoteError::Timeout {
            operation: "quote insert",
            limit_ms: budget.as_millis(),
        }),
    }
}

/// SQLite-backed quote store.
pub struct SqliteQuoteStore {
    pool: SqlitePool,
}

impl SqliteQuoteStore {
    /// Open (or create) the database file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(storage_error)?;
        Ok(Self { pool })
    }

    /// Create the quote table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn insert(&self, quote: &PriceQuote) -> Result<()> {
        sqlx::query(INSERT_QUOTE)
            .bind(&quote.code)
            .bind(&quote.codein)
            .bind(&quote.name)
            .bind(&quote.high)
            .bind(&quote.low)
            .bind(&quote.var_bid)
            .bind(&quote.pct_change)
            .bind(&quote.bid)
            .bind(&quote.ask)
            .bind(&quote.timestamp)
            .bind(&quote.create_date)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM USDBRL")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(count as u64)
    }
}

fn storage_error(err: sqlx::Error) -> QuoteError {
    QuoteError::Storage(err.to_string())
}
