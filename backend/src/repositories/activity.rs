//! Daily activity repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use health_tracker_shared::DailyActivity;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Daily activity record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyActivityRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub sleep_hours: f64,
    pub water_intake: f64,
    pub calorie_intake: f64,
    pub fitness_program_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<DailyActivityRecord> for DailyActivity {
    fn from(r: DailyActivityRecord) -> Self {
        DailyActivity {
            id: r.id,
            user_id: r.user_id,
            date: r.date,
            sleep_hours: r.sleep_hours,
            water_intake: r.water_intake,
            calorie_intake: r.calorie_intake,
            fitness_program_id: r.fitness_program_id,
            created_at: r.created_at,
        }
    }
}

/// Input for recording a day's activity
#[derive(Debug, Clone)]
pub struct UpsertDailyActivity {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub sleep_hours: f64,
    pub water_intake: f64,
    pub calorie_intake: f64,
    pub fitness_program_id: Option<Uuid>,
}

/// Daily activity repository
pub struct DailyActivityRepository;

impl DailyActivityRepository {
    /// Insert or overwrite the activity for (user, date)
    pub async fn upsert(conn: &mut PgConnection, input: UpsertDailyActivity) -> Result<DailyActivity> {
        let record = sqlx::query_as::<_, DailyActivityRecord>(
            r#"
            INSERT INTO daily_activities (user_id, date, sleep_hours, water_intake, calorie_intake, fitness_program_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, date) DO UPDATE SET
                sleep_hours = EXCLUDED.sleep_hours,
                water_intake = EXCLUDED.water_intake,
                calorie_intake = EXCLUDED.calorie_intake,
                fitness_program_id = EXCLUDED.fitness_program_id
            RETURNING id, user_id, date, sleep_hours, water_intake, calorie_intake, fitness_program_id, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.date)
        .bind(input.sleep_hours)
        .bind(input.water_intake)
        .bind(input.calorie_intake)
        .bind(input.fitness_program_id)
        .fetch_one(conn)
        .await?;

        Ok(record.into())
    }

    /// Most recent activity by date
    pub async fn get_latest(pool: &PgPool, user_id: Uuid) -> Result<Option<DailyActivity>> {
        let record = sqlx::query_as::<_, DailyActivityRecord>(
            r#"
            SELECT id, user_id, date, sleep_hours, water_intake, calorie_intake, fitness_program_id, created_at
            FROM daily_activities
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record.map(Into::into))
    }

    /// All activities for a user, newest date first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<DailyActivity>> {
        let records = sqlx::query_as::<_, DailyActivityRecord>(
            r#"
            SELECT id, user_id, date, sleep_hours, water_intake, calorie_intake, fitness_program_id, created_at
            FROM daily_activities
            WHERE user_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Number of days the user has logged
    pub async fn count_by_user(pool: &PgPool, user_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM daily_activities WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
