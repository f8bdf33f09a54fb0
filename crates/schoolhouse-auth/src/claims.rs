use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// JWT claims for access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub email: String,
    /// Expiration timestamp (seconds since epoch)
    pub exp: usize,
    /// Issued at timestamp (seconds since epoch)
    pub iat: usize,
}

impl Claims {
    /// The subject as a user id, or `None` when it is not a UUID.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialization_field_names() {
        let claims = Claims {
            sub: "5f0e2a4c-7c1b-4a63-9d55-0f3f7d0c9a11".to_string(),
            email: "ann@x.io".to_string(),
            exp: 1_700_003_600,
            iat: 1_700_000_000,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "5f0e2a4c-7c1b-4a63-9d55-0f3f7d0c9a11");
        assert_eq!(json["email"], "ann@x.io");
        assert_eq!(json["exp"], 1_700_003_600u64);
        assert_eq!(json["iat"], 1_700_000_000u64);
    }

    #[test]
    fn test_user_id_parses_uuid_subject() {
        let id = Uuid::new_v4();
        let claims = Claims {
            sub: id.to_string(),
            email: "ann@x.io".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.user_id(), Some(id));

        let claims = Claims {
            sub: "42".to_string(),
            ..claims
        };
        assert_eq!(claims.user_id(), None);
    }
}
