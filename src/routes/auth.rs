//! Authentication routes: login and session profile.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::user::{LoginRequest, LoginResponse, SessionUser};
use crate::AppState;

/// POST /api/v1/auth/login
///
/// Accepts `username` or `email` as the identifier.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let Json(body) = body?;
    body.validate()?;
    let session = state.auth.login(body.username.trim(), &body.password).await?;
    tracing::info!(user = %session.user.username, "Login successful");
    Ok(ApiResponse::success_with(session, "Login successful"))
}

/// Any non-POST method on the login route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// GET /api/v1/auth/me — current session user
pub async fn me(CurrentUser(user): CurrentUser) -> Json<ApiResponse<SessionUser>> {
    ApiResponse::success(user)
}
