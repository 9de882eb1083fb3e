//! Integration tests for daily log endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn day(date: &str, calories: f64, sleep_hours: f64, water_intake: f64) -> String {
    json!({
        "date": date,
        "sleep_hours": sleep_hours,
        "water_intake": water_intake,
        "actual_calories": calories,
        "actual_protein": 140.0,
        "actual_carbs": 144.0,
        "actual_fat": 48.0
    })
    .to_string()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_without_program_is_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user();

    let (status, response) = app
        .post_auth("/api/v1/daily-logs", &day("2024-06-01", 1435.0, 8.0, 2.5), &user.token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("fitness program"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_day_snapshots_targets() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user();
    let program = app.save_program(&user.token, "lose").await;

    let (status, response) = app
        .post_auth("/api/v1/daily-logs", &day("2024-06-01", 1435.0, 8.0, 2.5), &user.token)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", response);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let log = &response["nutrition_log"];
    assert_eq!(log["fitness_program_id"], program["id"]);
    assert_eq!(log["target_calories"], 1435);
    assert_eq!(log["calorie_achievement"], 100);
    assert_eq!(log["badges"]["calories"], "on_target");
    assert_eq!(log["achievements"].as_array().unwrap().len(), 6);
    assert_eq!(response["activity"]["fitness_program_id"], program["id"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_resubmitting_a_day_overwrites() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user();
    app.save_program(&user.token, "lose").await;

    app.post_auth("/api/v1/daily-logs", &day("2024-06-02", 1435.0, 8.0, 2.5), &user.token)
        .await;
    let (status, _) = app
        .post_auth("/api/v1/daily-logs", &day("2024-06-02", 1000.0, 6.0, 1.0), &user.token)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, log) = app.get_auth("/api/v1/daily-logs/2024-06-02", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    let log: serde_json::Value = serde_json::from_str(&log).unwrap();
    assert_eq!(log["actual_calories"], 1000.0);
    assert_eq!(log["calorie_achievement"], 70);

    let (_, activities) = app.get_auth("/api/v1/activities", &user.token).await;
    let activities: serde_json::Value = serde_json::from_str(&activities).unwrap();
    assert_eq!(activities.as_array().unwrap().len(), 1);
    assert_eq!(activities[0]["sleep_hours"], 6.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_keeps_targets_after_a_newer_program() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user();
    let lose = app.save_program(&user.token, "lose").await;

    let (status, _) = app
        .post_auth("/api/v1/daily-logs", &day("2024-06-03", 1435.0, 8.0, 2.5), &user.token)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let gain = app.save_program(&user.token, "gain").await;
    assert_eq!(gain["nutrition"]["calories"], 2719);

    let (status, log) = app.get_auth("/api/v1/daily-logs/2024-06-03", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    let log: serde_json::Value = serde_json::from_str(&log).unwrap();
    assert_eq!(log["target_calories"], 1435);
    assert_eq!(log["target_protein"], 140);
    assert_eq!(log["calorie_achievement"], 100);
    assert_eq!(log["fitness_program_id"], lose["id"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_survives_program_deletion() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user();
    let program = app.save_program(&user.token, "lose").await;

    let (status, _) = app
        .post_auth("/api/v1/daily-logs", &day("2024-06-04", 1435.0, 8.0, 2.5), &user.token)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let path = format!("/api/v1/programs/{}", program["id"].as_str().unwrap());
    let (status, _) = app.delete_auth(&path, &user.token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, log) = app.get_auth("/api/v1/daily-logs/2024-06-04", &user.token).await;
    assert_eq!(status, StatusCode::OK, "{}", log);
    let log: serde_json::Value = serde_json::from_str(&log).unwrap();
    assert_eq!(log["target_calories"], 1435);
    assert_eq!(log["target_fat"], 48);
    assert!(log.get("fitness_program_id").is_none());

    let (_, activities) = app.get_auth("/api/v1/activities", &user.token).await;
    let activities: serde_json::Value = serde_json::from_str(&activities).unwrap();
    assert_eq!(activities.as_array().unwrap().len(), 1);
    assert!(activities[0].get("fitness_program_id").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_missing_day_is_not_found() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user();

    let (status, _) = app.get_auth("/api/v1/daily-logs/2024-01-01", &user.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get_auth("/api/v1/daily-logs/yesterday", &user.token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
