//! User list routes.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::profile::{Profile, ProfileFilters};
use crate::services::profiles;
use crate::AppState;

/// GET /api/v1/users?q=&page=&per_page= — profiles, most recently updated first.
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    filters: Result<Query<ProfileFilters>, QueryRejection>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<ApiResponse<PagedResult<Profile>>>, AppError> {
    let Query(filters) = filters?;
    let Query(pagination) = pagination?;
    let result = profiles::list(&state.db, &filters, &pagination).await?;
    Ok(ApiResponse::success(result))
}
