//! Route definitions and router assembly for the finboard API.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod notifications;
pub mod users;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::AppState;

/// Largest accepted request body; every endpoint takes small JSON.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            tracing::warn!(url = %state.config.frontend_url, "Invalid FRONTEND_URL, allowing any origin");
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let auth_routes = Router::new()
        .route(
            "/auth/login",
            post(auth::login).fallback(auth::method_not_allowed),
        )
        .route("/auth/me", get(auth::me));

    let dashboard_routes = Router::new().route("/dashboard/workbench", get(dashboard::workbench));

    let user_routes = Router::new().route("/users", get(users::list));

    let notification_routes = Router::new().route(
        "/notifications",
        get(notifications::list).post(notifications::send),
    );

    let api = Router::new()
        .merge(auth_routes)
        .merge(dashboard_routes)
        .merge(user_routes)
        .merge(notification_routes);

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api/v1", api)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
