//! Health Tracker Shared Library
//!
//! The program generation and daily achievement engine, plus the data
//! models and API types shared by the backend and WASM modules.

pub mod analysis;
pub mod errors;
pub mod generator;
pub mod health_metrics;
pub mod models;
pub mod templates;
pub mod types;
pub mod validation;
pub mod wellness;

// Re-export commonly used items
pub use analysis::{analyze, AchievementBadge};
pub use errors::*;
pub use generator::{generate_program, generate_program_at, nutrition_targets};
pub use health_metrics::{calculate_metrics, MetricsBreakdown};
pub use models::*;
pub use wellness::{build_recommendation_deck, RecommendationCardDraft};
