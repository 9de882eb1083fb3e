//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared engine.

pub mod appointment;
pub mod daily_log;
pub mod dashboard;
pub mod program;
pub mod recommendation;

pub use appointment::AppointmentService;
pub use daily_log::DailyLogService;
pub use dashboard::DashboardService;
pub use program::ProgramService;
pub use recommendation::RecommendationService;
