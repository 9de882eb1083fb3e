//! Appointment repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use health_tracker_shared::Appointment;
use sqlx::PgPool;
use uuid::Uuid;

/// Appointment record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<AppointmentRecord> for Appointment {
    fn from(r: AppointmentRecord) -> Self {
        Appointment {
            id: r.id,
            user_id: r.user_id,
            date: r.date,
            time: r.time,
            description: r.description,
            created_at: r.created_at,
        }
    }
}

/// Input for booking an appointment
#[derive(Debug, Clone)]
pub struct CreateAppointment {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
}

/// Appointment repository
pub struct AppointmentRepository;

impl AppointmentRepository {
    pub async fn create(pool: &PgPool, input: CreateAppointment) -> Result<Appointment> {
        let record = sqlx::query_as::<_, AppointmentRecord>(
            r#"
            INSERT INTO appointments (user_id, date, time, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, date, time, description, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.date)
        .bind(input.time)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;

        Ok(record.into())
    }

    /// Appointments ordered by date, then time
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Appointment>> {
        let records = sqlx::query_as::<_, AppointmentRecord>(
            r#"
            SELECT id, user_id, date, time, description, created_at
            FROM appointments
            WHERE user_id = $1
            ORDER BY date ASC, time ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM appointments WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Appointments on or after `from`, soonest first
    pub async fn list_upcoming(
        pool: &PgPool,
        user_id: Uuid,
        from: NaiveDate,
        limit: i64,
    ) -> Result<Vec<Appointment>> {
        let records = sqlx::query_as::<_, AppointmentRecord>(
            r#"
            SELECT id, user_id, date, time, description, created_at
            FROM appointments
            WHERE user_id = $1 AND date >= $2
            ORDER BY date ASC, time ASC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn count_by_user(pool: &PgPool, user_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM appointments WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
