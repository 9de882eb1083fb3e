//! Error types for the health tracker engine

use thiserror::Error;

/// Errors raised by the program generator and achievement analyzer.
///
/// Both kinds are calling-convention violations: they are local,
/// synchronous and never worth retrying with the same input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A metric, goal or intake value is missing, non-finite or out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A target used as a percentage denominator is zero or negative
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
