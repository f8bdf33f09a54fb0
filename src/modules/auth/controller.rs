use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use schoolhouse_core::{AppError, ErrorResponse};

use super::model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};
use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Missing fields or user already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = AuthService::register_user(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            data: user,
        }),
    ))
}

/// Login and receive a JWT access token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// List registered users
#[utoipa::path(
    get,
    path = "/auth/users",
    responses(
        (status = 200, description = "All users, without credentials", body = Vec<User>),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = AuthService::list_users(&state.db).await?;
    Ok(Json(users))
}
