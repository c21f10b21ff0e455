//! Error types for the estimator boundary.

use thiserror::Error;

/// Errors crossing the estimator boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EstError {
    /// No estimator registered under the requested name.
    #[error("No estimator registered with name '{0}'")]
    EstimatorUnavailable(String),

    /// The estimator rejected or failed the run.
    #[error("Estimation failed: {0}")]
    EstimationFailed(String),
}

/// Result type for estimator boundary operations.
pub type EstResult<T> = Result<T, EstError>;
