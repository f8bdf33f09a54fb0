//! User records.
//!
//! [`UserCredentials`] is the stored row including the password hash and is
//! deliberately not `Serialize`; [`User`] is the only shape that leaves the
//! process.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Stored user row, hash included.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.io")]
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserCredentials> for User {
    fn from(record: UserCredentials) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            created_at: record.created_at,
        }
    }
}

/// Canonical form used for storing and looking up emails.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_credentials_drops_hash() {
        let record = UserCredentials {
            id: Uuid::new_v4(),
            name: "Ann".to_string(),
            email: "ann@x.io".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            created_at: chrono::Utc::now(),
        };

        let user = User::from(record.clone());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], record.id.to_string());
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["email"], "ann@x.io");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("$2b$"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ann@X.io "), "ann@x.io");
        assert_eq!(normalize_email("ann@x.io"), "ann@x.io");
    }
}
