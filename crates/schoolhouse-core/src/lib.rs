//! # Schoolhouse Core
//!
//! Core types, errors, and utilities for the Schoolhouse API.
//!
//! - [`errors`]: Application error type and the authentication error taxonomy
//! - [`pagination`]: Page/limit query parameters and response metadata
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_core::{AppError, AuthError, hash_password};
//!
//! let hash = hash_password("secret1").await?;
//! let err: AppError = AuthError::DuplicateUser.into();
//! ```

pub mod errors;
pub mod pagination;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, AuthError, ErrorResponse};
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{
    PASSWORD_HASH_COST, hash_password, hash_password_blocking, verify_password,
    verify_password_blocking,
};
