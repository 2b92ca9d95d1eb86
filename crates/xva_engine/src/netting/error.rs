//! Netting aggregation error types.

use thiserror::Error;

/// Errors raised while constructing netting aggregation inputs.
///
/// All variants are construction-time failures: aggregation operations
/// assume the lengths validated here and never re-check them per call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NettingError {
    /// A funding group was built with no credit/debt group paths.
    #[error("Funding group requires at least one credit/debt group path")]
    EmptyGroupArray,

    /// A required series was empty.
    #[error("Series {0} must not be empty")]
    EmptySeries(&'static str),

    /// A series did not match the expected length.
    #[error("Series {series} has length {found}, expected {expected}")]
    SeriesLengthMismatch {
        /// Name of the offending series.
        series: &'static str,
        /// Length required by the enclosing container.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// A credit/debt group's vertex count did not match the market path.
    #[error(
        "Credit/debt group {group_index} has vertex count {found}, market path has {expected}"
    )]
    GroupVertexCountMismatch {
        /// Index of the offending group in the supplied array.
        group_index: usize,
        /// Vertex count of the shared market path.
        expected: usize,
        /// Vertex count carried by the group.
        found: usize,
    },

    /// A scalar adjustment roll-up was NaN or infinite.
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}
