//! Program generator
//!
//! Combines the metric calculator and the template table into an unsaved
//! [`FitnessProgram`]. Persisting it is a separate step owned by the caller.

use crate::errors::EngineResult;
use crate::health_metrics::calculate_metrics;
use crate::models::{FitnessProgram, NutritionTargets, UserMetrics};
use crate::templates::select_template;
use chrono::{DateTime, Utc};

/// Compute the nutrition targets for a set of metrics
pub fn nutrition_targets(metrics: &UserMetrics) -> EngineResult<NutritionTargets> {
    let breakdown = calculate_metrics(metrics)?;
    let (_, recommendations) = select_template(metrics.goal);

    Ok(NutritionTargets {
        calories: breakdown.calories,
        protein: breakdown.protein,
        carbs: breakdown.carbs,
        fat: breakdown.fat,
        recommendations,
    })
}

/// Generate a program stamped with the current time
pub fn generate_program(metrics: &UserMetrics) -> EngineResult<FitnessProgram> {
    generate_program_at(metrics, Utc::now())
}

/// Generate a program with an explicit creation time
pub fn generate_program_at(
    metrics: &UserMetrics,
    created_at: DateTime<Utc>,
) -> EngineResult<FitnessProgram> {
    let nutrition = nutrition_targets(metrics)?;
    let (exercises, _) = select_template(metrics.goal);

    Ok(FitnessProgram {
        id: None,
        user_id: None,
        goal: metrics.goal,
        exercises,
        nutrition,
        created_at,
    })
}
