//! Error types for placement runs.

use thiserror::Error;

/// Result type alias for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;

/// Errors that can occur during a placement run.
///
/// Most GA edge cases (zero total fitness, no eligible server for a gene,
/// identical parents) are handled by documented fallback policies inside
/// the operators and never surface as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Malformed configuration or input (population size < 1,
    /// generations < 1, tasks with no servers to host them).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Leader election attempted on an empty chromosome.
    #[error("no candidate: {0}")]
    NoCandidate(String),
}
