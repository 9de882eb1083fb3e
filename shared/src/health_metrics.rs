//! Health metrics calculations module
//!
//! Computes BMR, BMI and the goal-conditioned calorie and macro targets that
//! drive a fitness program.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Fixed Formulas**: Constants are part of the program contract and
//!    must not drift between releases
//! 3. **Type Safety**: `Goal` is a closed enum, so every table is exhaustive

use crate::errors::EngineResult;
use crate::models::{Goal, UserMetrics};
use crate::validation::{check_field, validate_age, validate_height_cm, validate_weight};
use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding
// ============================================================================

/// Round half up to the nearest integer (`2.5 -> 3`, `-2.5 -> -2`)
///
/// Differs from `f64::round`, which rounds half away from zero.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

// ============================================================================
// Input checks
// ============================================================================

/// Reject non-finite or out-of-range body metrics
pub fn check_metrics(metrics: &UserMetrics) -> EngineResult<()> {
    check_field("height_cm", validate_height_cm(metrics.height_cm))?;
    check_field("weight_kg", validate_weight(metrics.weight_kg))?;
    check_field("age", validate_age(metrics.age_years))?;
    Ok(())
}

/// Round to one decimal for display (`22.857 -> 22.9`)
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and calorie targets
// ============================================================================

/// Basal Metabolic Rate, Mifflin-St Jeor without the sex term
///
/// BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y)
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years)
}

/// Per-goal constants used to derive targets from BMR and weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalFactors {
    pub activity_factor: f64,
    /// kcal added to (positive) or removed from (negative) the adjusted BMR
    pub calorie_adjustment: f64,
    /// grams of protein per kg of body weight
    pub protein_per_kg: f64,
    /// share of calories from carbohydrates
    pub carb_ratio: f64,
    /// share of calories from fat
    pub fat_ratio: f64,
}

const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

impl Goal {
    pub fn factors(self) -> GoalFactors {
        match self {
            Goal::Lose => GoalFactors {
                activity_factor: 1.2,
                calorie_adjustment: -500.0,
                protein_per_kg: 2.0,
                carb_ratio: 0.4,
                fat_ratio: 0.3,
            },
            Goal::Gain => GoalFactors {
                activity_factor: 1.5,
                calorie_adjustment: 300.0,
                protein_per_kg: 2.2,
                carb_ratio: 0.5,
                fat_ratio: 0.25,
            },
            Goal::Maintain => GoalFactors {
                activity_factor: 1.4,
                calorie_adjustment: 0.0,
                protein_per_kg: 1.6,
                carb_ratio: 0.45,
                fat_ratio: 0.3,
            },
        }
    }
}

/// Daily calorie target for a goal
pub fn calorie_target(bmr: f64, goal: Goal) -> i32 {
    let factors = goal.factors();
    round_half_up(bmr * factors.activity_factor + factors.calorie_adjustment)
}

/// Macro grams derived from an already rounded calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

/// Derive protein, carbs and fat targets
///
/// Each field is rounded independently; the macro calories are not forced
/// to add up to `calories`.
pub fn macro_targets(calories: i32, weight_kg: f64, goal: Goal) -> MacroTargets {
    let factors = goal.factors();
    let calories = f64::from(calories);
    MacroTargets {
        protein: round_half_up(weight_kg * factors.protein_per_kg),
        carbs: round_half_up(calories * factors.carb_ratio / KCAL_PER_GRAM_CARBS),
        fat: round_half_up(calories * factors.fat_ratio / KCAL_PER_GRAM_FAT),
    }
}

/// Full breakdown of a metrics calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsBreakdown {
    pub bmr: f64,
    /// One decimal; the category is classified on the unrounded value
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

/// Compute BMR, BMI and the goal's calorie and macro targets
pub fn calculate_metrics(metrics: &UserMetrics) -> EngineResult<MetricsBreakdown> {
    check_metrics(metrics)?;

    let bmr = calculate_bmr(metrics.weight_kg, metrics.height_cm, metrics.age_years);
    let bmi = calculate_bmi(metrics.weight_kg, metrics.height_cm);
    let calories = calorie_target(bmr, metrics.goal);
    let macros = macro_targets(calories, metrics.weight_kg, metrics.goal);

    Ok(MetricsBreakdown {
        bmr,
        bmi: round_to_tenth(bmi),
        bmi_category: classify_bmi(bmi),
        calories,
        protein: macros.protein,
        carbs: macros.carbs,
        fat: macros.fat,
    })
}
