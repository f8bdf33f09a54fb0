//! # Schoolhouse Auth
//!
//! Token claims and JWT issuing/verification for the Schoolhouse API.
//!
//! - [`claims`]: the [`Claims`] carried by every access token
//! - [`jwt`]: [`create_access_token`] and [`verify_token`]
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_auth::{create_access_token, verify_token};
//! use schoolhouse_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token(user_id, "ann@x.io", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
