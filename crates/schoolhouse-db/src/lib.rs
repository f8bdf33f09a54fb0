//! # Schoolhouse DB
//!
//! PostgreSQL connection pool setup for the Schoolhouse API.
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_config::DatabaseConfig;
//! use schoolhouse_db::init_db_pool;
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! ```

use std::time::Duration;

use schoolhouse_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

/// Upper bound on waiting for a free connection.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connects a pool sized from `config`.
///
/// The returned pool is cheaply cloneable and should be passed to the
/// application state for use in request handlers.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Returns `true` when `err` is a Postgres unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Returns `true` when `err` is a Postgres foreign-key violation.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
