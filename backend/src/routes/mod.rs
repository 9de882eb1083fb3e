//! Route definitions for the Health Tracker API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod appointments;
mod daily_logs;
mod dashboard;
mod health;
mod programs;
mod recommendations;

#[cfg(test)]
mod router_tests;

pub use appointments::appointment_routes;
pub use daily_logs::{activity_routes, daily_log_routes};
pub use dashboard::dashboard_routes;
pub use programs::program_routes;
pub use recommendations::recommendation_routes;

/// Request bodies are small JSON documents
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(render_metrics))
        .nest("/api/v1", api_routes())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Health Tracker API v1" }))
        .nest("/programs", program_routes())
        .nest("/daily-logs", daily_log_routes())
        .nest("/activities", activity_routes())
        .nest("/recommendations", recommendation_routes())
        .nest("/appointments", appointment_routes())
        .nest("/dashboard", dashboard_routes())
}

/// GET /metrics - Prometheus text exposition
async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics().render()
}
