//! Database connection setup.

use std::time::Duration;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::Result;

/// Opens a connection pool and verifies the database answers.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;

    ping(&pool).await?;
    info!("Database connection established (max_connections={})", max_connections);

    Ok(pool)
}

/// Single-connection in-memory database.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// pinned to one connection that never idles out.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    ping(&pool).await?;
    Ok(pool)
}

async fn ping(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
