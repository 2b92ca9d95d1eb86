//! Error types for structured error handling.
//!
//! This module provides:
//! - `MarketError`: Errors from market universe construction
//! - `CloseOutError`: Errors from close-out policy construction

use thiserror::Error;

/// Errors raised while constructing market universe objects.
///
/// All variants are construction-time invalid-input conditions: a
/// `MarketVertex`, `MarketEdge`, or `MarketPath` either builds completely or
/// refuses to build. No universe object is ever silently defaulted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketError {
    /// A numeric field was NaN or infinite.
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),

    /// A replicator (numeraire) value was not strictly positive.
    #[error("Replicator {0} must be strictly positive, got {1}")]
    NonPositiveReplicator(&'static str, f64),

    /// A recovery rate fell outside the unit interval.
    #[error("Recovery rate must lie in [0, 1], got {0}")]
    RecoveryOutOfRange(f64),

    /// Edge endpoints are not in strictly increasing time order.
    #[error("Edge finish anchor {finish} must exceed start anchor {start}")]
    NonIncreasingAnchor {
        /// Day offset of the start vertex.
        start: f64,
        /// Day offset of the finish vertex.
        finish: f64,
    },

    /// A market path was built from an empty vertex sequence.
    #[error("Market path requires at least one vertex")]
    EmptyPath,
}

/// Errors raised while constructing close-out policies.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CloseOutError {
    /// A recovery rate fell outside the unit interval.
    #[error("{side} recovery rate must lie in [0, 1], got {rate}")]
    RecoveryOutOfRange {
        /// Which counterparty the rate belongs to.
        side: &'static str,
        /// The offending rate.
        rate: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_error_display() {
        let err = MarketError::NonFinite("position_manifest_value");
        assert_eq!(
            format!("{}", err),
            "Non-finite value for position_manifest_value"
        );

        let err = MarketError::EmptyPath;
        assert_eq!(format!("{}", err), "Market path requires at least one vertex");
    }

    #[test]
    fn test_close_out_error_display() {
        let err = CloseOutError::RecoveryOutOfRange {
            side: "dealer",
            rate: 1.2,
        };
        assert_eq!(
            format!("{}", err),
            "dealer recovery rate must lie in [0, 1], got 1.2"
        );
    }
}
