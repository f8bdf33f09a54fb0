//! # Schoolhouse Models
//!
//! Domain models and DTOs for the Schoolhouse API.
//!
//! - [`users`]: stored credentials and the public user shape
//! - [`auth`]: register/login requests and responses
//! - [`students`], [`teachers`], [`courses`]: school entities and their DTOs

pub mod auth;
pub mod courses;
pub mod students;
pub mod teachers;
pub mod users;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

/// Plain `{"message": "..."}` acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Deserializes an absent or `null` string field as `""`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rejects values that are empty once surrounding whitespace is stripped.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
