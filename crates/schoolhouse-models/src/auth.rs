//! Register and login DTOs.
//!
//! Absent, `null` and empty fields all deserialize to `""` so that the
//! service can report them uniformly as missing.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::null_as_empty;
use crate::users::User;

/// Width of the `users.name` and `users.email` columns.
pub const MAX_USER_FIELD_LENGTH: usize = 255;

fn fits_user_column(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() > MAX_USER_FIELD_LENGTH {
        let mut err = ValidationError::new("length");
        err.message = Some(Cow::Borrowed("Name and email must be at most 255 characters"));
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "All fields are required"),
        custom(function = "fits_user_column")
    )]
    #[schema(example = "Ann")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "All fields are required"),
        custom(function = "fits_user_column")
    )]
    #[schema(example = "ann@x.io")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

impl RegisterRequest {
    /// Whitespace-only name or email counts as missing; passwords are taken verbatim.
    pub fn has_missing_fields(&self) -> bool {
        self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "ann@x.io")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

impl LoginRequest {
    pub fn has_missing_fields(&self) -> bool {
        self.email.trim().is_empty() || self.password.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "User registered successfully")]
    pub message: String,
    pub data: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_missing_fields_deserialize_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"ann@x.io"}"#).unwrap();
        assert_eq!(req.name, "");
        assert!(req.has_missing_fields());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_null_field_is_missing() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name":null,"email":"ann@x.io","password":"secret1"}"#)
                .unwrap();
        assert!(req.has_missing_fields());
    }

    #[test]
    fn test_register_whitespace_name_is_missing() {
        let req = RegisterRequest {
            name: "   ".to_string(),
            email: "ann@x.io".to_string(),
            password: "secret1".to_string(),
        };
        assert!(req.validate().is_ok());
        assert!(req.has_missing_fields());
    }

    #[test]
    fn test_register_complete() {
        let req = RegisterRequest {
            name: "Ann".to_string(),
            email: "ann@x.io".to_string(),
            password: "secret1".to_string(),
        };
        assert!(req.validate().is_ok());
        assert!(!req.has_missing_fields());
    }

    #[test]
    fn test_register_rejects_overlong_name() {
        let req = RegisterRequest {
            name: "a".repeat(300),
            email: "ann@x.io".to_string(),
            password: "secret1".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_register_accepts_name_at_column_width() {
        let req = RegisterRequest {
            name: "é".repeat(MAX_USER_FIELD_LENGTH),
            email: "ann@x.io".to_string(),
            password: "secret1".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_missing_password() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"ann@x.io"}"#).unwrap();
        assert!(req.has_missing_fields());
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_value(LoginResponse {
            message: "Login successful".to_string(),
            token: "t".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"message": "Login successful", "token": "t"}));
    }
}
