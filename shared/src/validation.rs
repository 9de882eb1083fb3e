//! Input validation functions
//!
//! Range checks shared by the engine and the service layer. The engine runs
//! them on every call, so callers that skip the request DTOs (the WASM
//! bindings) get the same bounds.

use crate::errors::EngineError;
use crate::models::Goal;

/// Validate body weight (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in whole years
pub fn validate_age(age_years: u32) -> Result<(), String> {
    if age_years < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age_years > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

/// Validate a goal string (`lose`, `gain` or `maintain`)
pub fn validate_goal(goal: &str) -> Result<(), String> {
    goal.parse::<Goal>().map(|_| ()).map_err(|_| {
        format!(
            "Invalid goal. Must be one of: {}",
            Goal::ALL.map(Goal::as_str).join(", ")
        )
    })
}

/// Validate hours slept in a day (0-24)
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep hours must be a valid number".to_string());
    }
    if !(0.0..=24.0).contains(&hours) {
        return Err("Sleep hours must be between 0 and 24".to_string());
    }
    Ok(())
}

/// Validate daily water intake (in liters)
pub fn validate_water_liters(liters: f64) -> Result<(), String> {
    if liters.is_nan() || liters.is_infinite() {
        return Err("Water intake must be a valid number".to_string());
    }
    if liters < 0.0 {
        return Err("Water intake cannot be negative".to_string());
    }
    if liters > 20.0 {
        return Err("Water intake unreasonably high".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a macronutrient amount (in grams)
pub fn validate_macro_grams(grams: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err("Amount must be a valid number".to_string());
    }
    if grams < 0.0 {
        return Err("Amount cannot be negative".to_string());
    }
    if grams > 5000.0 {
        return Err("Amount unreasonably high".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "age" => "Age",
        "goal" => "Goal",
        "sleep_hours" => "Sleep Hours",
        "water_intake" => "Water Intake",
        "actual_calories" => "Calories",
        "actual_protein" => "Protein",
        "actual_carbs" => "Carbohydrates",
        "actual_fat" => "Fat",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::InvalidInput(err.user_message())
    }
}

/// Run a validator and attach the field name to its error
pub fn check_field(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|message| ValidationError::new(field, &message))
}
