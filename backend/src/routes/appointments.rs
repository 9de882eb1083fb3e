//! Appointment API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::AppointmentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use health_tracker_shared::types::CreateAppointmentRequest;
use health_tracker_shared::Appointment;
use uuid::Uuid;

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route("/:id", delete(delete_appointment))
}

/// GET /api/v1/appointments - Ordered by date, then time
async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(AppointmentService::list(state.db(), auth.user_id).await?))
}

/// POST /api/v1/appointments
async fn create_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let appointment = AppointmentService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// DELETE /api/v1/appointments/:id
async fn delete_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let appointment_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid appointment ID".to_string()))?;

    AppointmentService::delete(state.db(), auth.user_id, appointment_id).await?;
    Ok(Json(serde_json::json!({"deleted": true})))
}
