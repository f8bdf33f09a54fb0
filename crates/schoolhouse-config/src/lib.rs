//! # Schoolhouse Config
//!
//! Configuration types for the Schoolhouse API, loaded from environment
//! variables once at startup:
//!
//! - [`jwt`]: token signing secret, lifetime and gate trust model
//! - [`cors`]: allowed browser origins
//! - [`database`]: connection URL and pool size
//! - [`server`]: bind address and request timeout
//!
//! Every config type has a `from_env()` constructor and a `from_lookup()`
//! constructor taking any `Fn(&str) -> Option<String>`, which tests use to
//! feed values without touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_config::{CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{JwtConfig, TrustModel};
pub use server::ServerConfig;

/// Reads `key` from the process environment.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses an optional numeric setting, falling back to `default` when unset or blank.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value: raw })
        }
        _ => Ok(default),
    }
}
