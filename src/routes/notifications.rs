//! Notification sender routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::notification::{Notification, SendNotification};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::notifications;
use crate::AppState;

/// POST /api/v1/notifications — send to one recipient, or broadcast.
pub async fn send(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<SendNotification>, JsonRejection>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let Json(body) = body?;
    let body = body.trimmed();
    body.validate()?;
    let notification = notifications::send(&state.db, &body, &user.username).await?;
    Ok(ApiResponse::success_with(notification, "Notification sent"))
}

/// GET /api/v1/notifications — sent history, newest first.
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<ApiResponse<PagedResult<Notification>>>, AppError> {
    let Query(pagination) = pagination?;
    let result = notifications::list(&state.db, &pagination).await?;
    Ok(ApiResponse::success(result))
}
