use anyhow::Result;
use log::info;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use std::sync::Arc;

use super::error::StorageError;

#[cfg(test)]
const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// DbConnection hands out database connections to the stores.
///
/// It holds exactly one underlying connection; every store operation borrows
/// it for a single statement and gives it back when the guard is dropped,
/// including on error paths.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open the database at `url`, creating an empty file if it doesn't exist.
    /// Tables are expected to be there already.
    pub async fn new(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database file for {}", url);
            Sqlite::create_database(url).await?
        }

        let options = SqliteConnectOptions::from_str(url)?;
        Self::connect_with(options).await
    }

    async fn connect_with(options: SqliteConnectOptions) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Private in-memory database with the expected tables loaded
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        use sqlx::Executor;

        let db = Self::connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?).await?;
        db.pool.as_ref().execute(SCHEMA_SQL).await?;
        Ok(db)
    }

    /// Borrow the connection for one statement
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, StorageError> {
        self.pool.acquire().await.map_err(StorageError::Connection)
    }

    /// Start a transaction; it rolls back on drop unless committed
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, StorageError> {
        self.pool.begin().await.map_err(StorageError::Connection)
    }

    /// Close the connection. Later acquisitions fail with `StorageError::Connection`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
