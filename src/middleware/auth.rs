use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use schoolhouse_auth::{Claims, verify_token};
use schoolhouse_config::TrustModel;
use schoolhouse_core::{AppError, AuthError};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;

/// Extracts the raw token from the `Authorization` header.
///
/// A missing or blank header is [`AuthError::NoToken`]; a header that is not
/// visible ASCII is [`AuthError::InvalidToken`]. The `Bearer ` prefix is
/// stripped when present.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::NoToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        return Err(AuthError::NoToken);
    }

    Ok(token)
}

/// The authenticated caller, as proven by a verified token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Runs the full gate check against `headers`.
    pub async fn resolve(headers: &HeaderMap, state: &AppState) -> Result<Self, AuthError> {
        let token = bearer_token(headers)?;
        let claims = verify_token(token, &state.jwt_config)?;

        if state.jwt_config.trust_model == TrustModel::StoreValidated {
            let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;
            if AuthService::find_user_by_id(&state.db, user_id)
                .await?
                .is_none()
            {
                tracing::warn!(%user_id, "token names a user that no longer exists");
                return Err(AuthError::InvalidToken);
            }
        }

        Ok(AuthUser(claims))
    }

    /// Get the user ID as UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0
            .user_id()
            .ok_or_else(|| AuthError::InvalidToken.into())
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

/// Gate middleware for protected routers.
///
/// Attach with `route_layer(middleware::from_fn_with_state(state, authenticate))`
/// so unmatched paths still fall through to `404`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = AuthUser::resolve(req.headers(), &state).await?;
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        Ok(AuthUser::resolve(&parts.headers, state).await?)
    }
}
