//! Trajectory state error types.

use thiserror::Error;

/// Errors raised while assembling trajectory state.
///
/// During an Euler step these are mapped to an empty step result rather
/// than propagated: a vertex that cannot be formed means the step could not
/// be evaluated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DerivativeError {
    /// A numeric field was NaN or infinite.
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}
