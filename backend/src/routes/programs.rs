//! Fitness program API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ProgramService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use health_tracker_shared::types::{GenerateProgramRequest, SaveProgramRequest};
use health_tracker_shared::{FitnessProgram, MetricsBreakdown};
use uuid::Uuid;

/// Create fitness program routes
pub fn program_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_programs).post(save_program))
        .route("/generate", post(generate_program))
        .route("/metrics", post(calculate_metrics))
        .route("/latest", get(get_latest_program))
        .route("/:id", delete(delete_program))
}

/// POST /api/v1/programs/generate - Preview a program, nothing is stored
async fn generate_program(
    auth: AuthUser,
    Json(req): Json<GenerateProgramRequest>,
) -> Result<Json<FitnessProgram>, ApiError> {
    let program = ProgramService::generate(auth.user_id, &req)?;
    Ok(Json(program))
}

/// POST /api/v1/programs/metrics - BMR, BMI and targets
async fn calculate_metrics(
    _auth: AuthUser,
    Json(req): Json<GenerateProgramRequest>,
) -> Result<Json<MetricsBreakdown>, ApiError> {
    Ok(Json(ProgramService::breakdown(&req)?))
}

/// POST /api/v1/programs - Save a previewed program
async fn save_program(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SaveProgramRequest>,
) -> Result<(StatusCode, Json<FitnessProgram>), ApiError> {
    let program = ProgramService::save(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(program)))
}

/// GET /api/v1/programs - List saved programs, newest first
async fn list_programs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<FitnessProgram>>, ApiError> {
    Ok(Json(ProgramService::list(state.db(), auth.user_id).await?))
}

/// GET /api/v1/programs/latest - Most recent saved program
async fn get_latest_program(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<FitnessProgram>, ApiError> {
    ProgramService::latest(state.db(), auth.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No fitness program found".to_string()))
}

/// DELETE /api/v1/programs/:id - Delete a saved program
async fn delete_program(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let program_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid program ID".to_string()))?;

    ProgramService::delete(state.db(), auth.user_id, program_id).await?;
    Ok(Json(serde_json::json!({"deleted": true})))
}
