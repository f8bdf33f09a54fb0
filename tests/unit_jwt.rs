use schoolhouse::schoolhouse_auth::{create_access_token, verify_token};
use schoolhouse::schoolhouse_config::{JwtConfig, TrustModel};
use schoolhouse::schoolhouse_core::AuthError;
use uuid::Uuid;

fn config(secret: &str, expiry: i64) -> JwtConfig {
    JwtConfig {
        secret: secret.to_string(),
        access_token_expiry: expiry,
        trust_model: TrustModel::StoreValidated,
    }
}

#[test]
fn test_token_carries_identity() {
    let jwt_config = config("test-secret", 3600);
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "ann@x.io", &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.user_id(), Some(user_id));
    assert_eq!(claims.email, "ann@x.io");
}

#[test]
fn test_token_lifetime_follows_config() {
    let jwt_config = config("test-secret", 120);

    let token = create_access_token(Uuid::new_v4(), "ann@x.io", &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.exp - claims.iat, 120);
}

#[test]
fn test_tokens_for_different_users_differ() {
    let jwt_config = config("test-secret", 3600);

    let a = create_access_token(Uuid::new_v4(), "a@x.io", &jwt_config).unwrap();
    let b = create_access_token(Uuid::new_v4(), "b@x.io", &jwt_config).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_rotated_secret_invalidates_tokens() {
    let token = create_access_token(Uuid::new_v4(), "ann@x.io", &config("old", 3600)).unwrap();

    let result = verify_token(&token, &config("new", 3600));
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}
