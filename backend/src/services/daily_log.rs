//! Daily log service
//!
//! Analyzes a day's intake against the latest saved program and records the
//! activity and the nutrition log together.

use crate::error::ApiError;
use crate::repositories::{
    DailyActivityRepository, FitnessProgramRepository, NutritionLogRepository,
    UpsertDailyActivity, UpsertNutritionLog,
};
use chrono::NaiveDate;
use health_tracker_shared::types::{LogDayRequest, LogDayResponse, NutritionLogResponse};
use health_tracker_shared::{analyze, DailyActivity, NutritionLog};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

const NO_PROGRAM_MESSAGE: &str = "Please create a fitness program first";

/// Daily log service for business logic
pub struct DailyLogService;

impl DailyLogService {
    /// Analyze and record a day
    ///
    /// Resubmitting the same date overwrites both the activity and the log.
    pub async fn log_day(
        pool: &PgPool,
        user_id: Uuid,
        req: LogDayRequest,
    ) -> Result<LogDayResponse, ApiError> {
        req.validate()?;

        let program = FitnessProgramRepository::get_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Validation(NO_PROGRAM_MESSAGE.to_string()))?;
        let program_id = program
            .id
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("stored program has no id")))?;

        let intake = req.intake();
        let result = analyze(&intake, &program.nutrition)?;
        debug!(
            %user_id,
            date = %req.date,
            calorie_achievement = result.calorie_achievement,
            "Analyzed daily intake"
        );

        let mut tx = pool.begin().await?;

        let activity = DailyActivityRepository::upsert(
            &mut *tx,
            UpsertDailyActivity {
                user_id,
                date: req.date,
                sleep_hours: req.sleep_hours,
                water_intake: req.water_intake,
                calorie_intake: req.actual_calories,
                fitness_program_id: Some(program_id),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        let log = NutritionLogRepository::upsert(
            &mut *tx,
            UpsertNutritionLog {
                user_id,
                date: req.date,
                daily_activity_id: activity.id,
                fitness_program_id: program_id,
                actual: intake,
                targets: program.nutrition,
                result,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        tx.commit().await?;

        metrics::counter!("daily_logs_analyzed_total").increment(1);
        info!(%user_id, date = %req.date, %program_id, "Recorded daily log");

        Ok(LogDayResponse {
            activity,
            nutrition_log: log.into(),
        })
    }

    /// All nutrition logs, newest date first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<NutritionLogResponse>, ApiError> {
        let logs = NutritionLogRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(logs.into_iter().map(NutritionLogResponse::from).collect())
    }

    pub async fn get_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<NutritionLogResponse, ApiError> {
        let log: NutritionLog = NutritionLogRepository::get_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("No daily log for {}", date)))?;
        Ok(log.into())
    }

    /// All daily activities, newest date first
    pub async fn activities(pool: &PgPool, user_id: Uuid) -> Result<Vec<DailyActivity>, ApiError> {
        DailyActivityRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }
}
