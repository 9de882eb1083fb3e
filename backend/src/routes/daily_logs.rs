//! Daily log API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::DailyLogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use health_tracker_shared::types::{LogDayRequest, LogDayResponse, NutritionLogResponse};
use health_tracker_shared::DailyActivity;

/// Create daily log routes
pub fn daily_log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs).post(log_day))
        .route("/:date", get(get_log))
}

/// Create activity routes
pub fn activity_routes() -> Router<AppState> {
    Router::new().route("/", get(list_activities))
}

/// POST /api/v1/daily-logs - Analyze and record a day
async fn log_day(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogDayRequest>,
) -> Result<(StatusCode, Json<LogDayResponse>), ApiError> {
    let response = DailyLogService::log_day(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/daily-logs - List nutrition logs, newest first
async fn list_logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<NutritionLogResponse>>, ApiError> {
    Ok(Json(DailyLogService::list(state.db(), auth.user_id).await?))
}

/// GET /api/v1/daily-logs/:date - One day's nutrition log
async fn get_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(date): Path<String>,
) -> Result<Json<NutritionLogResponse>, ApiError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Invalid date format. Use YYYY-MM-DD".to_string()))?;

    Ok(Json(DailyLogService::get_by_date(state.db(), auth.user_id, date).await?))
}

/// GET /api/v1/activities - List daily activities, newest first
async fn list_activities(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<DailyActivity>>, ApiError> {
    Ok(Json(DailyLogService::activities(state.db(), auth.user_id).await?))
}
