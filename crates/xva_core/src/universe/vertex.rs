//! Market snapshot at one time node.

use crate::types::error::MarketError;

use super::entity::MarketVertexEntity;

/// Snapshot of the simulated market at one time node of a scenario.
///
/// Carries the position manifest value, the dealer and client entity states,
/// and the collateral-account (CSA) replicator, anchored at a day offset on
/// the scenario's time grid. Immutable once produced by the scenario
/// generator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketVertex {
    anchor: f64,
    position_manifest_value: f64,
    dealer: MarketVertexEntity,
    client: MarketVertexEntity,
    csa_replicator: f64,
}

impl MarketVertex {
    /// Creates a new market vertex.
    ///
    /// # Arguments
    ///
    /// * `anchor` - Day offset of this node on the scenario grid
    /// * `position_manifest_value` - Value of the position manifest at this node
    /// * `dealer` - Dealer entity state
    /// * `client` - Client entity state
    /// * `csa_replicator` - Collateral-account replicator value (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `MarketError` if the anchor or position value is not finite,
    /// or the CSA replicator is non-positive.
    pub fn new(
        anchor: f64,
        position_manifest_value: f64,
        dealer: MarketVertexEntity,
        client: MarketVertexEntity,
        csa_replicator: f64,
    ) -> Result<Self, MarketError> {
        if !anchor.is_finite() {
            return Err(MarketError::NonFinite("anchor"));
        }
        if !position_manifest_value.is_finite() {
            return Err(MarketError::NonFinite("position_manifest_value"));
        }
        if !csa_replicator.is_finite() || csa_replicator <= 0.0 {
            return Err(MarketError::NonPositiveReplicator(
                "csa_replicator",
                csa_replicator,
            ));
        }

        Ok(Self {
            anchor,
            position_manifest_value,
            dealer,
            client,
            csa_replicator,
        })
    }

    /// Returns the day offset of this node.
    #[inline]
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Returns the position manifest value at this node.
    #[inline]
    pub fn position_manifest_value(&self) -> f64 {
        self.position_manifest_value
    }

    /// Returns the dealer entity state.
    #[inline]
    pub fn dealer(&self) -> &MarketVertexEntity {
        &self.dealer
    }

    /// Returns the client entity state.
    #[inline]
    pub fn client(&self) -> &MarketVertexEntity {
        &self.client
    }

    /// Returns the collateral-account replicator value.
    #[inline]
    pub fn csa_replicator(&self) -> f64 {
        self.csa_replicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> MarketVertexEntity {
        MarketVertexEntity::new(1.0, None, 0.4, 0.01).unwrap()
    }

    #[test]
    fn test_vertex_valid() {
        let vertex = MarketVertex::new(10.0, 100.0, entity(), entity(), 1.0).unwrap();
        assert_eq!(vertex.anchor(), 10.0);
        assert_eq!(vertex.position_manifest_value(), 100.0);
        assert_eq!(vertex.csa_replicator(), 1.0);
    }

    #[test]
    fn test_vertex_rejects_non_finite_inputs() {
        assert!(MarketVertex::new(f64::NAN, 100.0, entity(), entity(), 1.0).is_err());
        assert!(MarketVertex::new(0.0, f64::INFINITY, entity(), entity(), 1.0).is_err());
    }

    #[test]
    fn test_vertex_rejects_non_positive_csa_replicator() {
        assert!(MarketVertex::new(0.0, 100.0, entity(), entity(), 0.0).is_err());
        assert!(MarketVertex::new(0.0, 100.0, entity(), entity(), -0.5).is_err());
    }

    #[test]
    fn test_vertex_allows_negative_position_value() {
        // A short position manifests as a negative value; that is valid data.
        let vertex = MarketVertex::new(0.0, -50.0, entity(), entity(), 1.0).unwrap();
        assert_eq!(vertex.position_manifest_value(), -50.0);
    }
}
