//! Fitness program repository

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use health_tracker_shared::{Exercise, FitnessProgram, Goal, NutritionTargets};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Fitness program record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FitnessProgramRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal: String,
    pub exercises: Json<Vec<Exercise>>,
    pub nutrition: Json<NutritionTargets>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<FitnessProgramRecord> for FitnessProgram {
    type Error = anyhow::Error;

    fn try_from(record: FitnessProgramRecord) -> Result<Self> {
        let goal: Goal = record
            .goal
            .parse()
            .with_context(|| format!("corrupt goal on program {}", record.id))?;

        Ok(FitnessProgram {
            id: Some(record.id),
            user_id: Some(record.user_id),
            goal,
            exercises: record.exercises.0,
            nutrition: record.nutrition.0,
            created_at: record.created_at,
        })
    }
}

/// Input for storing a program
#[derive(Debug, Clone)]
pub struct CreateFitnessProgram {
    pub user_id: Uuid,
    pub goal: Goal,
    pub exercises: Vec<Exercise>,
    pub nutrition: NutritionTargets,
}

/// Fitness program repository
pub struct FitnessProgramRepository;

impl FitnessProgramRepository {
    /// Store a new program
    pub async fn create(pool: &PgPool, input: CreateFitnessProgram) -> Result<FitnessProgram> {
        let record = sqlx::query_as::<_, FitnessProgramRecord>(
            r#"
            INSERT INTO fitness_programs (user_id, goal, exercises, nutrition)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, goal, exercises, nutrition, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.goal.as_str())
        .bind(Json(&input.exercises))
        .bind(Json(&input.nutrition))
        .fetch_one(pool)
        .await?;

        record.try_into()
    }

    /// Most recently created program for a user
    pub async fn get_latest(pool: &PgPool, user_id: Uuid) -> Result<Option<FitnessProgram>> {
        let record = sqlx::query_as::<_, FitnessProgramRecord>(
            r#"
            SELECT id, user_id, goal, exercises, nutrition, created_at
            FROM fitness_programs
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        record.map(FitnessProgram::try_from).transpose()
    }

    /// All programs for a user, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<FitnessProgram>> {
        let records = sqlx::query_as::<_, FitnessProgramRecord>(
            r#"
            SELECT id, user_id, goal, exercises, nutrition, created_at
            FROM fitness_programs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        records.into_iter().map(FitnessProgram::try_from).collect()
    }

    /// Delete a program owned by the user
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM fitness_programs WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
