//! Planning error model.

use thiserror::Error;

/// Result type used across the planning domain.
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Planning-level error.
///
/// The engine is pure and has no external dependencies that can fail, so
/// invalid input is its only failure mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// An input failed validation (non-positive or non-finite value).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PlanningError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
