//! Recommendation API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use health_tracker_shared::RecommendationCard;

pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recommendations))
        .route("/refresh", post(refresh_recommendations))
}

/// GET /api/v1/recommendations
async fn list_recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<RecommendationCard>>, ApiError> {
    Ok(Json(RecommendationService::list(state.db(), auth.user_id).await?))
}

/// POST /api/v1/recommendations/refresh - Rebuild from the latest activity
async fn refresh_recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<RecommendationCard>>, ApiError> {
    Ok(Json(RecommendationService::refresh(state.db(), auth.user_id).await?))
}
