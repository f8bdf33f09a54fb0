use anyhow::Context;
use sqlx::PgPool;

use schoolhouse_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use schoolhouse_db::init_db_pool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

/// Loads every config from the environment and connects the pool.
///
/// Fails if `DATABASE_URL` or `JWT_SECRET` is missing, if any numeric
/// setting does not parse, or if the database is unreachable.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let server_config = ServerConfig::from_env().context("invalid server configuration")?;
    let database_config = DatabaseConfig::from_env().context("invalid database configuration")?;

    let db = init_db_pool(&database_config)
        .await
        .context("failed to connect to database")?;

    Ok(AppState {
        db,
        jwt_config,
        cors_config: CorsConfig::from_env(),
        server_config,
    })
}
