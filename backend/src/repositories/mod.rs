//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod activity;
pub mod appointment;
pub mod nutrition_log;
pub mod program;
pub mod recommendation;

pub use activity::{DailyActivityRepository, UpsertDailyActivity};
pub use appointment::{AppointmentRepository, CreateAppointment};
pub use nutrition_log::{NutritionLogRepository, UpsertNutritionLog};
pub use program::{CreateFitnessProgram, FitnessProgramRepository};
pub use recommendation::RecommendationRepository;
