use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{get_users, login_user, register_user};
use crate::middleware::auth::authenticate;
use crate::state::AppState;

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route_layer(middleware::from_fn_with_state(state, authenticate))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}
