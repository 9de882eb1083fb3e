//! Data models for the health tracker

use crate::errors::EngineError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Program goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Gain,
    Maintain,
}

impl Goal {
    /// Every goal, in template table order
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Gain, Goal::Maintain];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Gain => "gain",
            Goal::Maintain => "maintain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "gain" => Ok(Goal::Gain),
            "maintain" => Ok(Goal::Maintain),
            other => Err(EngineError::InvalidInput(format!("unknown goal '{}'", other))),
        }
    }
}

/// Body metrics submitted with a program generation request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserMetrics {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in whole years
    pub age_years: u32,
    pub goal: Goal,
}

/// A single exercise in a program template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub description: String,
}

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionTargets {
    /// kcal
    pub calories: i32,
    /// grams
    pub protein: i32,
    /// grams
    pub carbs: i32,
    /// grams
    pub fat: i32,
    pub recommendations: Vec<String>,
}

/// Generated fitness program
///
/// `id` and `user_id` stay empty until the program is saved, so a freshly
/// generated program can be previewed without touching the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessProgram {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub goal: Goal,
    pub exercises: Vec<Exercise>,
    pub nutrition: NutritionTargets,
    pub created_at: DateTime<Utc>,
}

impl FitnessProgram {
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}

/// What the user actually consumed and slept on a given day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyIntake {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fat: f64,
    /// liters
    pub water_intake: f64,
    pub sleep_hours: f64,
}

/// Output of the achievement analyzer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub achievements: Vec<String>,
    pub calorie_achievement: i32,
    pub protein_achievement: i32,
    pub carbs_achievement: i32,
    pub fat_achievement: i32,
}

/// One row per (user, date)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyActivity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub sleep_hours: f64,
    /// liters
    pub water_intake: f64,
    /// kcal
    pub calorie_intake: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_program_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Analysed nutrition entry for one day
///
/// Targets are copied from the program at analysis time so the log stays
/// stable if the user later saves a new program or deletes this one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub daily_activity_id: Uuid,
    /// Cleared when the program is deleted
    #[serde(skip_serializing_if = "Option::is_none")]
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

/// Recommendation card category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    General,
    Nutrition,
    Exercise,
    Wellness,
}

impl RecommendationCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RecommendationCategory::General => "general",
            RecommendationCategory::Nutrition => "nutrition",
            RecommendationCategory::Exercise => "exercise",
            RecommendationCategory::Wellness => "wellness",
        }
    }
}

impl FromStr for RecommendationCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(RecommendationCategory::General),
            "nutrition" => Ok(RecommendationCategory::Nutrition),
            "exercise" => Ok(RecommendationCategory::Exercise),
            "wellness" => Ok(RecommendationCategory::Wellness),
            other => Err(EngineError::InvalidInput(format!(
                "unknown recommendation category '{}'",
                other
            ))),
        }
    }
}

/// Stored recommendation card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationCard {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: RecommendationCategory,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Booked appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
