//! Access token issuing and verification.
//!
//! Tokens are HS256-signed with the server secret from [`JwtConfig`] and
//! carry the user id (`sub`), `email`, `iat` and `exp`. Verification checks
//! the signature and expiry (with `jsonwebtoken`'s default 60 second
//! leeway); any failure is reported as [`AuthError::InvalidToken`] without
//! saying which check failed.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use schoolhouse_config::JwtConfig;
use schoolhouse_core::{AppError, AuthError};

use crate::claims::Claims;

/// Signs an access token for `user_id` valid for the configured lifetime.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

/// Verifies signature and expiry and returns the embedded claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolhouse_config::TrustModel;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: 3600,
            trust_model: TrustModel::Stateless,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_and_verify_token() {
        let jwt_config = config("test-secret");
        let user_id = Uuid::new_v4();

        let token = create_access_token(user_id, "ann@x.io", &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "ann@x.io");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_uses_hs256() {
        let jwt_config = config("test-secret");
        let token = create_access_token(Uuid::new_v4(), "ann@x.io", &jwt_config).unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, jsonwebtoken::Algorithm::HS256);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = create_access_token(Uuid::new_v4(), "ann@x.io", &config("secret-a")).unwrap();

        let result = verify_token(&token, &config("secret-b"));
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_expired_token() {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "ann@x.io".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = sign(&claims, "test-secret");

        let result = verify_token(&token, &config("test-secret"));
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_tampered_payload() {
        let jwt_config = config("test-secret");
        let token = create_access_token(Uuid::new_v4(), "ann@x.io", &jwt_config).unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = sign(
            &Claims {
                sub: Uuid::new_v4().to_string(),
                email: "mallory@x.io".to_string(),
                iat: 0,
                exp: usize::MAX / 2,
            },
            "other-secret",
        );
        let forged_payload = forged.split('.').nth(1).unwrap().to_string();
        parts[1] = &forged_payload;
        let tampered = parts.join(".");

        let result = verify_token(&tampered, &jwt_config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_garbage() {
        let jwt_config = config("test-secret");
        for token in ["", "abc", "a.b.c", "Bearer"] {
            assert!(matches!(
                verify_token(token, &jwt_config),
                Err(AuthError::InvalidToken)
            ));
        }
    }
}
