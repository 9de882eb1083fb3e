//! API request and response types

use crate::analysis::AchievementBadge;
use crate::errors::EngineError;
use crate::models::{
    Appointment, DailyActivity, DailyIntake, Exercise, Goal, NutritionLog, NutritionTargets,
    UserMetrics,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Fitness Program Types
// ============================================================================

/// Program generation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateProgramRequest {
    /// Height in cm
    #[validate(range(min = 50.0, max = 300.0))]
    pub height: f64,
    /// Weight in kg
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight: f64,
    /// Age in years
    #[validate(range(min = 1, max = 150))]
    pub age: u32,
    /// `lose`, `gain` or `maintain`
    pub goal: String,
}

impl GenerateProgramRequest {
    pub fn to_metrics(&self) -> Result<UserMetrics, EngineError> {
        Ok(UserMetrics {
            height_cm: self.height,
            weight_kg: self.weight,
            age_years: self.age,
            goal: self.goal.parse()?,
        })
    }
}

/// Save request carrying a previewed (or client-reconstructed) program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveProgramRequest {
    pub goal: Goal,
    pub exercises: Vec<Exercise>,
    pub nutrition: NutritionTargets,
}

// ============================================================================
// Daily Log Types
// ============================================================================

/// Daily activity and nutrition submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogDayRequest {
    pub date: NaiveDate,
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_hours: f64,
    /// Liters
    #[validate(range(min = 0.0, max = 20.0))]
    pub water_intake: f64,
    #[validate(range(min = 0.0, max = 50000.0))]
    pub actual_calories: f64,
    #[validate(range(min = 0.0, max = 5000.0))]
    pub actual_protein: f64,
    #[validate(range(min = 0.0, max = 5000.0))]
    pub actual_carbs: f64,
    #[validate(range(min = 0.0, max = 5000.0))]
    pub actual_fat: f64,
}

impl LogDayRequest {
    pub fn intake(&self) -> DailyIntake {
        DailyIntake {
            calories: self.actual_calories,
            protein: self.actual_protein,
            carbs: self.actual_carbs,
            fat: self.actual_fat,
            water_intake: self.water_intake,
            sleep_hours: self.sleep_hours,
        }
    }
}

/// Badge per macro percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AchievementBadges {
    pub calories: AchievementBadge,
    pub protein: AchievementBadge,
    pub carbs: AchievementBadge,
    pub fat: AchievementBadge,
}

/// Nutrition log with display badges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLogResponse {
    #[serde(flatten)]
    pub log: NutritionLog,
    pub badges: AchievementBadges,
}

impl From<NutritionLog> for NutritionLogResponse {
    fn from(log: NutritionLog) -> Self {
        let badges = AchievementBadges {
            calories: AchievementBadge::from_percentage(f64::from(log.calorie_achievement)),
            protein: AchievementBadge::from_percentage(f64::from(log.protein_achievement)),
            carbs: AchievementBadge::from_percentage(f64::from(log.carbs_achievement)),
            fat: AchievementBadge::from_percentage(f64::from(log.fat_achievement)),
        };
        Self { log, badges }
    }
}

/// Result of a daily log submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogDayResponse {
    pub activity: DailyActivity,
    pub nutrition_log: NutritionLogResponse,
}

// ============================================================================
// Appointment Types
// ============================================================================

/// Appointment booking request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    pub date: NaiveDate,
    /// `HH:MM`
    pub time: String,
    #[validate(length(min = 1, max = 500))]
    pub description: String,
}

// ============================================================================
// Dashboard Types
// ============================================================================

/// Overview shown on the home screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub activity_count: i64,
    pub appointment_count: i64,
    pub latest_activity: Option<DailyActivity>,
    /// Next appointments from today on, soonest first
    pub upcoming_appointments: Vec<Appointment>,
}
