//! Close-out valuation on counterparty default.
//!
//! When either side defaults, the surviving side realises a close-out value
//! on the pre-default derivative value, net of recovery. The convention is a
//! small closed set of variants behind a two-operation capability
//! (`dealer_default`, `client_default`); a new close-out convention adds a
//! variant here rather than a rewrite of the evolution engine.
//!
//! # Bilateral convention
//!
//! With dealer recovery R_b and client recovery R_c, for a pre-default
//! value V:
//!
//! - On dealer default the client realises `V` when V > 0, else `R_b × V`
//! - On client default the dealer realises `V` when V < 0, else `R_c × V`
//!
//! so that `client_default(V) ≤ V ≤ dealer_default(V)` for an asset-side
//! value.

use crate::types::error::CloseOutError;

/// Bilateral close-out applied to both sides of the trade.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloseOutBilateral {
    dealer_senior_funding_recovery: f64,
    client_recovery: f64,
}

impl CloseOutBilateral {
    /// Creates a bilateral close-out from the two recovery rates.
    ///
    /// # Errors
    ///
    /// Returns `CloseOutError::RecoveryOutOfRange` unless both rates lie in
    /// [0, 1].
    pub fn new(
        dealer_senior_funding_recovery: f64,
        client_recovery: f64,
    ) -> Result<Self, CloseOutError> {
        if !dealer_senior_funding_recovery.is_finite()
            || !(0.0..=1.0).contains(&dealer_senior_funding_recovery)
        {
            return Err(CloseOutError::RecoveryOutOfRange {
                side: "dealer",
                rate: dealer_senior_funding_recovery,
            });
        }
        if !client_recovery.is_finite() || !(0.0..=1.0).contains(&client_recovery) {
            return Err(CloseOutError::RecoveryOutOfRange {
                side: "client",
                rate: client_recovery,
            });
        }

        Ok(Self {
            dealer_senior_funding_recovery,
            client_recovery,
        })
    }

    /// Returns the dealer senior funding recovery rate.
    #[inline]
    pub fn dealer_senior_funding_recovery(&self) -> f64 {
        self.dealer_senior_funding_recovery
    }

    /// Returns the client recovery rate.
    #[inline]
    pub fn client_recovery(&self) -> f64 {
        self.client_recovery
    }

    /// Value realised by the client upon dealer default.
    #[inline]
    pub fn dealer_default(&self, value: f64) -> f64 {
        if value > 0.0 {
            value
        } else {
            self.dealer_senior_funding_recovery * value
        }
    }

    /// Value realised by the dealer upon client default.
    #[inline]
    pub fn client_default(&self, value: f64) -> f64 {
        if value < 0.0 {
            value
        } else {
            self.client_recovery * value
        }
    }
}

/// Close-out policy over the supported conventions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloseOut {
    /// Bilateral close-out on both sides.
    Bilateral(CloseOutBilateral),
}

impl CloseOut {
    /// Creates a bilateral close-out policy.
    ///
    /// # Errors
    ///
    /// Returns `CloseOutError::RecoveryOutOfRange` unless both rates lie in
    /// [0, 1].
    pub fn bilateral(
        dealer_senior_funding_recovery: f64,
        client_recovery: f64,
    ) -> Result<Self, CloseOutError> {
        CloseOutBilateral::new(dealer_senior_funding_recovery, client_recovery)
            .map(CloseOut::Bilateral)
    }

    /// Value realised by the client upon dealer default.
    #[inline]
    pub fn dealer_default(&self, value: f64) -> f64 {
        match self {
            CloseOut::Bilateral(scheme) => scheme.dealer_default(value),
        }
    }

    /// Value realised by the dealer upon client default.
    #[inline]
    pub fn client_default(&self, value: f64) -> f64 {
        match self {
            CloseOut::Bilateral(scheme) => scheme.client_default(value),
        }
    }
}

/// Named close-out conventions a caller can select without carrying
/// recovery rates around.
///
/// The evolution engine holds one of these in its control settings and
/// instantiates the concrete [`CloseOut`] policy from the finish-state
/// recovery rates at each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloseOutConvention {
    /// Bilateral close-out on both sides.
    #[default]
    Bilateral,
}

impl CloseOutConvention {
    /// Instantiates the close-out policy for this convention.
    pub fn policy(
        &self,
        dealer_senior_funding_recovery: f64,
        client_recovery: f64,
    ) -> Result<CloseOut, CloseOutError> {
        match self {
            CloseOutConvention::Bilateral => {
                CloseOut::bilateral(dealer_senior_funding_recovery, client_recovery)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bilateral_rejects_recovery_out_of_range() {
        assert!(CloseOutBilateral::new(-0.1, 0.4).is_err());
        assert!(CloseOutBilateral::new(0.4, 1.5).is_err());
        assert!(CloseOutBilateral::new(f64::NAN, 0.4).is_err());
        assert!(CloseOutBilateral::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn test_dealer_default_asset_side() {
        let close_out = CloseOutBilateral::new(0.4, 0.75).unwrap();

        // The client keeps an asset-side value in full on dealer default.
        assert_eq!(close_out.dealer_default(10.0), 10.0);
        // A liability-side value is written down to dealer recovery.
        assert_relative_eq!(close_out.dealer_default(-10.0), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_client_default_liability_side() {
        let close_out = CloseOutBilateral::new(0.4, 0.75).unwrap();

        // The dealer owes a liability-side value in full on client default.
        assert_eq!(close_out.client_default(-10.0), -10.0);
        // An asset-side value is written down to client recovery.
        assert_relative_eq!(close_out.client_default(10.0), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_close_out_ordering_for_asset_values() {
        let close_out = CloseOut::bilateral(0.4, 0.75).unwrap();

        for value in [0.0, 0.5, 5.0, 500.0] {
            assert!(close_out.client_default(value) <= value);
            assert!(value <= close_out.dealer_default(value));
        }
    }

    #[test]
    fn test_convention_builds_bilateral_policy() {
        let policy = CloseOutConvention::Bilateral.policy(0.4, 0.75).unwrap();
        assert_eq!(policy.dealer_default(10.0), 10.0);
        assert!(CloseOutConvention::Bilateral.policy(2.0, 0.75).is_err());
    }
}
