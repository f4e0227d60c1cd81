//! Dashboard routes: the workbench view-model.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::errors::ApiResponse;
use crate::middleware::auth::CurrentUser;
use crate::models::dashboard::DashboardView;
use crate::services::dashboard::{self, PgMetricsSource};
use crate::AppState;

/// GET /api/v1/dashboard/workbench — rebuilt from the store on every call.
pub async fn workbench(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<ApiResponse<DashboardView>> {
    let source = PgMetricsSource::new(state.db.clone());
    let view = dashboard::load(&source, Utc::now()).await;
    ApiResponse::success(view)
}
