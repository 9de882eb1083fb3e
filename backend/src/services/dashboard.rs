//! Dashboard overview

use crate::error::ApiError;
use crate::repositories::{AppointmentRepository, DailyActivityRepository};
use chrono::Utc;
use health_tracker_shared::types::DashboardResponse;
use sqlx::PgPool;
use uuid::Uuid;

/// Upcoming appointments shown on the dashboard
const UPCOMING_APPOINTMENTS_LIMIT: i64 = 3;

pub struct DashboardService;

impl DashboardService {
    pub async fn overview(pool: &PgPool, user_id: Uuid) -> Result<DashboardResponse, ApiError> {
        let today = Utc::now().date_naive();

        let activity_count = DailyActivityRepository::count_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let appointment_count = AppointmentRepository::count_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let latest_activity = DailyActivityRepository::get_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let upcoming_appointments =
            AppointmentRepository::list_upcoming(pool, user_id, today, UPCOMING_APPOINTMENTS_LIMIT)
                .await
                .map_err(ApiError::Internal)?;

        Ok(DashboardResponse {
            activity_count,
            appointment_count,
            latest_activity,
            upcoming_appointments,
        })
    }
}
