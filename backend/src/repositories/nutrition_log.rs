//! Daily nutrition log repository
//!
//! Targets are snapshotted from the program at analysis time, so a log keeps
//! its meaning after the program is replaced or deleted.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use health_tracker_shared::{AnalysisResult, DailyIntake, NutritionLog, NutritionTargets};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

const LOG_COLUMNS: &str = r#"
    id, user_id, date, daily_activity_id, fitness_program_id,
    actual_calories, actual_protein, actual_carbs, actual_fat,
    target_calories, target_protein, target_carbs, target_fat,
    calorie_achievement, protein_achievement, carbs_achievement, fat_achievement,
    analysis, recommendations, achievements, created_at, updated_at
"#;

/// Nutrition log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NutritionLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub daily_activity_id: Uuid,
    pub fitness_program_id: Option<Uuid>,
    pub actual_calories: f64,
    pub actual_protein: f64,
    pub actual_carbs: f64,
    pub actual_fat: f64,
    pub target_calories: i32,
    pub target_protein: i32,
    pub target_carbs: i32,
    pub target_fat: i32,
    pub calorie_achievement: i32,
    pub protein_achievement: i32,
    pub carbs_achievement: i32,
    pub fat_achievement: i32,
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub achievements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NutritionLogRecord> for NutritionLog {
    fn from(r: NutritionLogRecord) -> Self {
        NutritionLog {
            id: r.id,
            user_id: r.user_id,
            date: r.date,
            daily_activity_id: r.daily_activity_id,
            fitness_program_id: r.fitness_program_id,
            actual_calories: r.actual_calories,
            actual_protein: r.actual_protein,
            actual_carbs: r.actual_carbs,
            actual_fat: r.actual_fat,
            target_calories: r.target_calories,
            target_protein: r.target_protein,
            target_carbs: r.target_carbs,
            target_fat: r.target_fat,
            calorie_achievement: r.calorie_achievement,
            protein_achievement: r.protein_achievement,
            carbs_achievement: r.carbs_achievement,
            fat_achievement: r.fat_achievement,
            analysis: r.analysis,
            recommendations: r.recommendations,
            achievements: r.achievements,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Input for recording a day's analysis
#[derive(Debug, Clone)]
pub struct UpsertNutritionLog {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub daily_activity_id: Uuid,
    pub fitness_program_id: Uuid,
    pub actual: DailyIntake,
    pub targets: NutritionTargets,
    pub result: AnalysisResult,
}

/// Nutrition log repository
pub struct NutritionLogRepository;

impl NutritionLogRepository {
    /// Insert or overwrite the log for (user, date)
    pub async fn upsert(conn: &mut PgConnection, input: UpsertNutritionLog) -> Result<NutritionLog> {
        let sql = format!(
            r#"
            INSERT INTO daily_nutrition_logs (
                user_id, date, daily_activity_id, fitness_program_id,
                actual_calories, actual_protein, actual_carbs, actual_fat,
                target_calories, target_protein, target_carbs, target_fat,
                calorie_achievement, protein_achievement, carbs_achievement, fat_achievement,
                analysis, recommendations, achievements
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            ON CONFLICT (user_id, date) DO UPDATE SET
                daily_activity_id = EXCLUDED.daily_activity_id,
                fitness_program_id = EXCLUDED.fitness_program_id,
                actual_calories = EXCLUDED.actual_calories,
                actual_protein = EXCLUDED.actual_protein,
                actual_carbs = EXCLUDED.actual_carbs,
                actual_fat = EXCLUDED.actual_fat,
                target_calories = EXCLUDED.target_calories,
                target_protein = EXCLUDED.target_protein,
                target_carbs = EXCLUDED.target_carbs,
                target_fat = EXCLUDED.target_fat,
                calorie_achievement = EXCLUDED.calorie_achievement,
                protein_achievement = EXCLUDED.protein_achievement,
                carbs_achievement = EXCLUDED.carbs_achievement,
                fat_achievement = EXCLUDED.fat_achievement,
                analysis = EXCLUDED.analysis,
                recommendations = EXCLUDED.recommendations,
                achievements = EXCLUDED.achievements,
                updated_at = NOW()
            RETURNING {LOG_COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, NutritionLogRecord>(&sql)
            .bind(input.user_id)
            .bind(input.date)
            .bind(input.daily_activity_id)
            .bind(input.fitness_program_id)
            .bind(input.actual.calories)
            .bind(input.actual.protein)
            .bind(input.actual.carbs)
            .bind(input.actual.fat)
            .bind(input.targets.calories)
            .bind(input.targets.protein)
            .bind(input.targets.carbs)
            .bind(input.targets.fat)
            .bind(input.result.calorie_achievement)
            .bind(input.result.protein_achievement)
            .bind(input.result.carbs_achievement)
            .bind(input.result.fat_achievement)
            .bind(&input.result.analysis)
            .bind(&input.result.recommendations)
            .bind(&input.result.achievements)
            .fetch_one(conn)
            .await?;

        Ok(record.into())
    }

    /// Log for a specific date
    pub async fn get_by_date(pool: &PgPool, user_id: Uuid, date: NaiveDate) -> Result<Option<NutritionLog>> {
        let sql = format!(
            "SELECT {LOG_COLUMNS} FROM daily_nutrition_logs WHERE user_id = $1 AND date = $2"
        );
        let record = sqlx::query_as::<_, NutritionLogRecord>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_optional(pool)
            .await?;

        Ok(record.map(Into::into))
    }

    /// All logs for a user, newest date first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<NutritionLog>> {
        let sql = format!(
            "SELECT {LOG_COLUMNS} FROM daily_nutrition_logs WHERE user_id = $1 ORDER BY date DESC"
        );
        let records = sqlx::query_as::<_, NutritionLogRecord>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
