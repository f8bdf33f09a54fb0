use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use schoolhouse_auth::create_access_token;
use schoolhouse_config::JwtConfig;
use schoolhouse_core::{AppError, AuthError, hash_password, verify_password};
use schoolhouse_db::is_unique_violation;

use super::model::{LoginRequest, RegisterRequest, User, UserCredentials, normalize_email};

pub struct AuthService;

impl AuthService {
    /// Stores a new user with a bcrypt hash of `dto.password`.
    ///
    /// The pre-insert lookup gives the common duplicate case a clean error;
    /// the `UNIQUE` constraint on `users.email` catches concurrent
    /// registrations that race past it.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        if dto.has_missing_fields() {
            return Err(AuthError::MissingFields.into());
        }

        let email = normalize_email(&dto.email);

        if Self::find_credentials_by_email(db, &email).await?.is_some() {
            return Err(AuthError::DuplicateUser.into());
        }

        let password_hash = hash_password(&dto.password).await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, created_at",
        )
        .bind(dto.name.trim())
        .bind(&email)
        .bind(&password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::DuplicateUser
            } else {
                AuthError::storage(e)
            }
        })?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Checks the password and issues an access token.
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        if dto.has_missing_fields() {
            return Err(AuthError::MissingFields.into());
        }

        let email = normalize_email(&dto.email);

        let record = Self::find_credentials_by_email(db, &email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(&dto.password, &record.password_hash).await? {
            tracing::warn!(user_id = %record.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        create_access_token(record.id, &record.email, jwt_config)
    }

    #[instrument(skip(db))]
    pub async fn list_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users ORDER BY created_at, id",
        )
        .fetch_all(db)
        .await
        .map_err(AuthError::storage)?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn find_user_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AuthError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AuthError::storage)
    }

    async fn find_credentials_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserCredentials>, AuthError> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(AuthError::storage)
    }
}
