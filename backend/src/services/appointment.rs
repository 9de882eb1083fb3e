//! Appointment service

use crate::error::ApiError;
use crate::repositories::{AppointmentRepository, CreateAppointment};
use chrono::NaiveTime;
use health_tracker_shared::types::CreateAppointmentRequest;
use health_tracker_shared::Appointment;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct AppointmentService;

impl AppointmentService {
    /// Parse `HH:MM` (seconds are accepted and kept)
    pub fn parse_time(value: &str) -> Result<NaiveTime, ApiError> {
        NaiveTime::parse_from_str(value, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
            .map_err(|_| ApiError::InvalidField {
                field: "time".to_string(),
                message: "Invalid time format. Use HH:MM".to_string(),
            })
    }

    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateAppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        req.validate()?;
        let time = Self::parse_time(&req.time)?;
        let description = req.description.trim();
        if description.is_empty() {
            return Err(ApiError::InvalidField {
                field: "description".to_string(),
                message: "Description cannot be empty".to_string(),
            });
        }

        let appointment = AppointmentRepository::create(
            pool,
            CreateAppointment {
                user_id,
                date: req.date,
                time,
                description: description.to_string(),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(%user_id, date = %appointment.date, "Created appointment");
        Ok(appointment)
    }

    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Appointment>, ApiError> {
        AppointmentRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Delete an appointment the user owns
    pub async fn delete(pool: &PgPool, user_id: Uuid, appointment_id: Uuid) -> Result<(), ApiError> {
        let deleted = AppointmentRepository::delete(pool, appointment_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Appointment not found".to_string()));
        }
        Ok(())
    }
}
