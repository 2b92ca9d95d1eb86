//! Evolution engine error types.

use thiserror::Error;

/// Errors raised while constructing evolution engine inputs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvolutionError {
    /// A primary security carried an invalid rate.
    #[error("Invalid primary security: {0}")]
    InvalidPrimarySecurity(String),

    /// A PDE edge evaluation carried an invalid field.
    #[error("Invalid edge evaluation: {0}")]
    InvalidEvaluation(String),
}
