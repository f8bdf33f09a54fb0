//! Authentication DTOs, re-exported from `schoolhouse-models`.

pub use schoolhouse_models::MessageResponse;
pub use schoolhouse_models::auth::*;
pub use schoolhouse_models::users::{User, UserCredentials, normalize_email};
