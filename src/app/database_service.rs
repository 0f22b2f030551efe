//! The relational data service.
//!
//! `DatabaseService` owns the SQLite pool and is the only component that
//! talks SQL. Every write runs inside a single transaction so a rejected or
//! failed operation leaves nothing behind. Resource-specific operations live
//! in sibling modules (`restaurants`, `customers`, `reviews`) as further
//! `impl DatabaseService` blocks.

use crate::app::error::ServiceResult;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// The main service that manages database interaction.
pub struct DatabaseService {
    pub(crate) pool: SqlitePool,
}

impl DatabaseService {
    /// Connects to `database_url`, enables foreign keys and applies migrations.
    ///
    /// In-memory databases are pinned to a single long-lived connection, since
    /// every SQLite connection to `:memory:` opens a fresh empty database.
    pub async fn connect(database_url: &str) -> ServiceResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<std::time::Duration>)
                .max_lifetime(None::<std::time::Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        MIGRATOR.run(&pool).await?;
        info!(database_url, in_memory, "database ready");

        Ok(Self { pool })
    }

    /// Round-trips a trivial query; used by the health endpoint.
    pub async fn ping(&self) -> ServiceResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Deletes every review, customer and restaurant in one transaction.
    pub async fn clear_db(&self) -> ServiceResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM reviews").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM customers").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM restaurants").execute(&mut *tx).await?;
        tx.commit().await?;
        info!("cleared all tables");
        Ok(())
    }
}
