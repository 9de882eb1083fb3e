//! Health Tracker WASM Module
//!
//! WebAssembly bindings so the browser can preview a program or a day's
//! analysis without a round trip to the backend.

use health_tracker_shared::{analysis, generator, health_metrics, NutritionTargets, UserMetrics};
use health_tracker_shared::{DailyIntake, Goal};
use wasm_bindgen::prelude::*;

/// Generate a program preview and return it as JSON
#[wasm_bindgen]
pub fn generate_program(height_cm: f64, weight_kg: f64, age_years: u32, goal: &str) -> Result<String, JsValue> {
    generate_program_json(height_cm, weight_kg, age_years, goal).map_err(|e| JsValue::from_str(&e))
}

/// Analyze a day. Both arguments and the result are JSON documents.
#[wasm_bindgen]
pub fn analyze_day(actual_json: &str, targets_json: &str) -> Result<String, JsValue> {
    analyze_day_json(actual_json, targets_json).map_err(|e| JsValue::from_str(&e))
}

/// BMI from weight (kg) and height (cm), rounded to one decimal
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    health_metrics::round_to_tenth(health_metrics::calculate_bmi(weight_kg, height_cm))
}

fn generate_program_json(height_cm: f64, weight_kg: f64, age_years: u32, goal: &str) -> Result<String, String> {
    let goal: Goal = goal.parse().map_err(|e| format!("{}", e))?;
    let metrics = UserMetrics {
        height_cm,
        weight_kg,
        age_years,
        goal,
    };
    let program = generator::generate_program(&metrics).map_err(|e| e.to_string())?;
    serde_json::to_string(&program).map_err(|e| e.to_string())
}

fn analyze_day_json(actual_json: &str, targets_json: &str) -> Result<String, String> {
    let actual: DailyIntake = serde_json::from_str(actual_json).map_err(|e| e.to_string())?;
    let targets: NutritionTargets = serde_json::from_str(targets_json).map_err(|e| e.to_string())?;
    let result = analysis::analyze(&actual, &targets).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_program_json() {
        let json = generate_program_json(170.0, 70.0, 30, "lose").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["goal"], "lose");
        assert_eq!(value["nutrition"]["calories"], 1435);
        assert_eq!(value["exercises"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_generate_program_rejects_unknown_goal() {
        let err = generate_program_json(170.0, 70.0, 30, "bulk").unwrap_err();
        assert!(err.contains("unknown goal"));
    }

    #[test]
    fn test_analyze_day_json() {
        let actual = r#"{"calories":2000,"protein":100,"carbs":200,"fat":60,"water_intake":2.5,"sleep_hours":8}"#;
        let targets = r#"{"calories":2000,"protein":100,"carbs":200,"fat":60,"recommendations":[]}"#;
        let json = analyze_day_json(actual, targets).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["calorie_achievement"], 100);
        assert_eq!(value["achievements"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_analyze_day_zero_target() {
        let actual = r#"{"calories":2000,"protein":100,"carbs":200,"fat":60,"water_intake":2.5,"sleep_hours":8}"#;
        let targets = r#"{"calories":0,"protein":100,"carbs":200,"fat":60,"recommendations":[]}"#;
        let err = analyze_day_json(actual, targets).unwrap_err();
        assert!(err.starts_with("Invalid target"));
    }

    #[test]
    fn test_analyze_day_rejects_impossible_sleep() {
        let actual = r#"{"calories":2000,"protein":100,"carbs":200,"fat":60,"water_intake":2.5,"sleep_hours":30}"#;
        let targets = r#"{"calories":2000,"protein":100,"carbs":200,"fat":60,"recommendations":[]}"#;
        let err = analyze_day_json(actual, targets).unwrap_err();
        assert!(err.starts_with("Invalid input"));
        assert!(err.contains("Sleep Hours"));
    }

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn generate_program_returns_json() {
        let json = generate_program(170.0, 70.0, 30, "gain").unwrap();
        assert!(json.contains("\"Bench Press\""));
    }

    #[wasm_bindgen_test]
    fn unknown_goal_is_an_error() {
        assert!(generate_program(170.0, 70.0, 30, "bulk").is_err());
    }
}
