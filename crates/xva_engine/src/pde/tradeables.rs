//! The universe of tradeable numeraires backing the replication strategy.

use super::error::EvolutionError;

/// One tradeable numeraire: its cash accumulation (financing) rate and the
/// drift of its replicator process.
///
/// # Examples
///
/// ```
/// use xva_engine::pde::PrimarySecurity;
///
/// // A CSA account accruing at 2% with 1% replicator drift
/// let csa = PrimarySecurity::new(0.02, 0.01).unwrap();
/// assert_eq!(csa.cash_accumulation_rate(), 0.02);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimarySecurity {
    cash_accumulation_rate: f64,
    drift_rate: f64,
}

impl PrimarySecurity {
    /// Creates a primary security.
    ///
    /// # Arguments
    ///
    /// * `cash_accumulation_rate` - Annualised rate at which holdings of
    ///   this security accrue cash when financed
    /// * `drift_rate` - Annualised drift of the security's replicator
    ///
    /// # Errors
    ///
    /// Returns `EvolutionError::InvalidPrimarySecurity` if either rate is
    /// NaN or infinite.
    pub fn new(cash_accumulation_rate: f64, drift_rate: f64) -> Result<Self, EvolutionError> {
        if !cash_accumulation_rate.is_finite() {
            return Err(EvolutionError::InvalidPrimarySecurity(
                "cash accumulation rate must be finite".to_string(),
            ));
        }
        if !drift_rate.is_finite() {
            return Err(EvolutionError::InvalidPrimarySecurity(
                "drift rate must be finite".to_string(),
            ));
        }

        Ok(Self {
            cash_accumulation_rate,
            drift_rate,
        })
    }

    /// Returns the cash accumulation rate.
    #[inline]
    pub fn cash_accumulation_rate(&self) -> f64 {
        self.cash_accumulation_rate
    }

    /// Returns the replicator drift rate.
    #[inline]
    pub fn drift_rate(&self) -> f64 {
        self.drift_rate
    }
}

/// The universe of tradeables the evolution scheme replicates with.
///
/// Holds the position itself, the collateral (CSA) account, the dealer's
/// senior and optional subordinate funding securities, and the client
/// funding security. Each component validates itself at construction, so
/// the container assembles infallibly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeablesContainer {
    position: PrimarySecurity,
    csa: PrimarySecurity,
    dealer_senior_funding: PrimarySecurity,
    dealer_subordinate_funding: Option<PrimarySecurity>,
    client_funding: PrimarySecurity,
}

impl TradeablesContainer {
    /// Assembles the tradeables universe.
    #[inline]
    pub fn new(
        position: PrimarySecurity,
        csa: PrimarySecurity,
        dealer_senior_funding: PrimarySecurity,
        dealer_subordinate_funding: Option<PrimarySecurity>,
        client_funding: PrimarySecurity,
    ) -> Self {
        Self {
            position,
            csa,
            dealer_senior_funding,
            dealer_subordinate_funding,
            client_funding,
        }
    }

    /// Returns the position tradeable.
    #[inline]
    pub fn position(&self) -> &PrimarySecurity {
        &self.position
    }

    /// Returns the CSA (collateral account) tradeable.
    #[inline]
    pub fn csa(&self) -> &PrimarySecurity {
        &self.csa
    }

    /// Returns the dealer senior funding tradeable.
    #[inline]
    pub fn dealer_senior_funding(&self) -> &PrimarySecurity {
        &self.dealer_senior_funding
    }

    /// Returns the dealer subordinate funding tradeable, if the dealer
    /// funds through a two-bond stack.
    #[inline]
    pub fn dealer_subordinate_funding(&self) -> Option<&PrimarySecurity> {
        self.dealer_subordinate_funding.as_ref()
    }

    /// Returns the client funding tradeable.
    #[inline]
    pub fn client_funding(&self) -> &PrimarySecurity {
        &self.client_funding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_security_valid() {
        let security = PrimarySecurity::new(0.03, 0.01).unwrap();
        assert_eq!(security.cash_accumulation_rate(), 0.03);
        assert_eq!(security.drift_rate(), 0.01);
    }

    #[test]
    fn test_primary_security_rejects_non_finite() {
        assert!(PrimarySecurity::new(f64::NAN, 0.0).is_err());
        assert!(PrimarySecurity::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_container_accessors() {
        let security = PrimarySecurity::new(0.03, 0.01).unwrap();
        let container =
            TradeablesContainer::new(security, security, security, None, security);

        assert!(container.dealer_subordinate_funding().is_none());
        assert_eq!(container.csa().cash_accumulation_rate(), 0.03);
    }
}
