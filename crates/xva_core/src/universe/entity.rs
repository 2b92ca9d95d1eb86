//! Per-entity market state at a time node.

use crate::types::error::MarketError;

/// Funding and credit state of one legal entity at one market vertex.
///
/// Both the dealer and the client carry the same shape: the value of the
/// replicator (numeraire) backing their senior funding, an optional
/// subordinate funding replicator (dealers with a two-bond funding stack),
/// the senior recovery rate, and the senior funding spread.
///
/// # Examples
///
/// ```
/// use xva_core::universe::MarketVertexEntity;
///
/// let dealer = MarketVertexEntity::new(1.02, Some(0.98), 0.4, 0.015).unwrap();
/// assert_eq!(dealer.senior_recovery_rate(), 0.4);
/// assert!(dealer.subordinate_funding_replicator().is_some());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketVertexEntity {
    senior_funding_replicator: f64,
    subordinate_funding_replicator: Option<f64>,
    senior_recovery_rate: f64,
    senior_funding_spread: f64,
}

impl MarketVertexEntity {
    /// Creates a new entity state.
    ///
    /// # Arguments
    ///
    /// * `senior_funding_replicator` - Senior funding numeraire value (must be positive)
    /// * `subordinate_funding_replicator` - Subordinate funding numeraire value, if the
    ///   entity funds through a subordinate bond as well (must be positive when present)
    /// * `senior_recovery_rate` - Senior recovery rate in [0, 1]
    /// * `senior_funding_spread` - Senior funding spread (annualised decimal)
    ///
    /// # Errors
    ///
    /// Returns `MarketError` if any replicator is non-positive, the recovery
    /// rate falls outside [0, 1], or the spread is not finite.
    pub fn new(
        senior_funding_replicator: f64,
        subordinate_funding_replicator: Option<f64>,
        senior_recovery_rate: f64,
        senior_funding_spread: f64,
    ) -> Result<Self, MarketError> {
        if !senior_funding_replicator.is_finite() || senior_funding_replicator <= 0.0 {
            return Err(MarketError::NonPositiveReplicator(
                "senior_funding_replicator",
                senior_funding_replicator,
            ));
        }
        if let Some(subordinate) = subordinate_funding_replicator {
            if !subordinate.is_finite() || subordinate <= 0.0 {
                return Err(MarketError::NonPositiveReplicator(
                    "subordinate_funding_replicator",
                    subordinate,
                ));
            }
        }
        if !senior_recovery_rate.is_finite()
            || !(0.0..=1.0).contains(&senior_recovery_rate)
        {
            return Err(MarketError::RecoveryOutOfRange(senior_recovery_rate));
        }
        if !senior_funding_spread.is_finite() {
            return Err(MarketError::NonFinite("senior_funding_spread"));
        }

        Ok(Self {
            senior_funding_replicator,
            subordinate_funding_replicator,
            senior_recovery_rate,
            senior_funding_spread,
        })
    }

    /// Returns the senior funding replicator value.
    #[inline]
    pub fn senior_funding_replicator(&self) -> f64 {
        self.senior_funding_replicator
    }

    /// Returns the subordinate funding replicator value, if present.
    #[inline]
    pub fn subordinate_funding_replicator(&self) -> Option<f64> {
        self.subordinate_funding_replicator
    }

    /// Returns the senior recovery rate.
    #[inline]
    pub fn senior_recovery_rate(&self) -> f64 {
        self.senior_recovery_rate
    }

    /// Returns the senior funding spread.
    #[inline]
    pub fn senior_funding_spread(&self) -> f64 {
        self.senior_funding_spread
    }
}
