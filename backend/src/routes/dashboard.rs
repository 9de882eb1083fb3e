//! Dashboard API route

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::DashboardService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use health_tracker_shared::types::DashboardResponse;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// GET /api/v1/dashboard
async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    Ok(Json(DashboardService::overview(state.db(), auth.user_id).await?))
}
