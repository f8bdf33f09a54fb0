//! bcrypt password hashing.
//!
//! The `*_blocking` functions do the CPU-bound work directly. Request
//! handlers use the async [`hash_password`] / [`verify_password`] wrappers,
//! which move that work onto Tokio's blocking pool.

use bcrypt::{BcryptError, hash, verify};

use crate::errors::AppError;

/// bcrypt work factor used for every stored hash.
pub const PASSWORD_HASH_COST: u32 = 10;

pub fn hash_password_blocking(password: &str) -> Result<String, BcryptError> {
    hash(password, PASSWORD_HASH_COST)
}

/// Returns `Ok(false)` on mismatch and `Err` only when `hash` is not a bcrypt hash.
pub fn verify_password_blocking(password: &str, hash: &str) -> Result<bool, BcryptError> {
    verify(password, hash)
}

pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(AppError::internal)?
        .map_err(AppError::internal)
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &hash))
        .await
        .map_err(AppError::internal)?
        .map_err(AppError::internal)
}
