use anyhow::anyhow;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware, routing::get};
use schoolhouse_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;

async fn welcome() -> &'static str {
    "Welcome to School API!"
}

async fn route_not_found() -> AppError {
    AppError::not_found(anyhow!("Route not found"))
}

/// `TimeoutLayer` answers with a bare 408; give it the usual error body.
async fn timeout_error_body(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::new(StatusCode::REQUEST_TIMEOUT, anyhow!("Request timed out"))
            .into_response();
    }
    response
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let gate = || middleware::from_fn_with_state(state.clone(), authenticate);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(welcome))
        .nest("/auth", init_auth_router(state.clone()))
        .nest("/students", init_students_router().route_layer(gate()))
        .nest("/courses", init_courses_router().route_layer(gate()))
        .nest("/teachers", init_teachers_router().route_layer(gate()))
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(TimeoutLayer::new(state.server_config.request_timeout))
        .layer(middleware::from_fn(timeout_error_body))
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}
