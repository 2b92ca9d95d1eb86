//! Seam to the external PDE right-hand-side operator.

use xva_core::universe::MarketEdge;

use crate::derivative::EvolutionTrajectoryVertex;

use super::error::EvolutionError;

/// One evaluation of the valuation-PDE source term over a market edge.
///
/// Carries theta together with its values under an up/down bump of the
/// position value (for central-difference delta and gamma estimation) and
/// the hedge-error growth over the step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeEvaluation {
    theta: f64,
    position_value_bump: f64,
    theta_position_value_up: f64,
    theta_position_value_down: f64,
    hedge_error_growth: f64,
}

impl EdgeEvaluation {
    /// Creates an edge evaluation.
    ///
    /// # Errors
    ///
    /// Returns `EvolutionError::InvalidEvaluation` if any field is NaN or
    /// infinite, or the position value bump is not strictly positive.
    pub fn new(
        theta: f64,
        position_value_bump: f64,
        theta_position_value_up: f64,
        theta_position_value_down: f64,
        hedge_error_growth: f64,
    ) -> Result<Self, EvolutionError> {
        if !theta.is_finite()
            || !theta_position_value_up.is_finite()
            || !theta_position_value_down.is_finite()
        {
            return Err(EvolutionError::InvalidEvaluation(
                "theta values must be finite".to_string(),
            ));
        }
        if !position_value_bump.is_finite() || position_value_bump <= 0.0 {
            return Err(EvolutionError::InvalidEvaluation(
                "position value bump must be strictly positive".to_string(),
            ));
        }
        if !hedge_error_growth.is_finite() {
            return Err(EvolutionError::InvalidEvaluation(
                "hedge error growth must be finite".to_string(),
            ));
        }

        Ok(Self {
            theta,
            position_value_bump,
            theta_position_value_up,
            theta_position_value_down,
            hedge_error_growth,
        })
    }

    /// Returns the PDE source term.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the position value bump used for the up/down evaluations.
    #[inline]
    pub fn position_value_bump(&self) -> f64 {
        self.position_value_bump
    }

    /// Returns theta evaluated at the up-bumped position value.
    #[inline]
    pub fn theta_position_value_up(&self) -> f64 {
        self.theta_position_value_up
    }

    /// Returns theta evaluated at the down-bumped position value.
    #[inline]
    pub fn theta_position_value_down(&self) -> f64 {
        self.theta_position_value_down
    }

    /// Returns the hedge-error growth over the step.
    #[inline]
    pub fn hedge_error_growth(&self) -> f64 {
        self.hedge_error_growth
    }
}

/// External PDE right-hand-side operator.
///
/// Given a market edge, the known trajectory vertex, and the applicable
/// collateral, evaluates the valuation-PDE source term and its bumped
/// variants. Implementations must be deterministic for identical inputs;
/// `None` signals that the evaluation could not be formed and aborts the
/// step.
pub trait PdeOperator {
    /// Evaluates the PDE source term over one market edge.
    fn edge_run(
        &self,
        market_edge: &MarketEdge<'_>,
        start_vertex: &EvolutionTrajectoryVertex,
        collateral: f64,
    ) -> Option<EdgeEvaluation>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_evaluation_valid() {
        let evaluation = EdgeEvaluation::new(2.0, 1.0, 2.2, 1.9, 0.05).unwrap();
        assert_eq!(evaluation.theta(), 2.0);
        assert_eq!(evaluation.position_value_bump(), 1.0);
        assert_eq!(evaluation.theta_position_value_up(), 2.2);
        assert_eq!(evaluation.theta_position_value_down(), 1.9);
        assert_eq!(evaluation.hedge_error_growth(), 0.05);
    }

    #[test]
    fn test_edge_evaluation_rejects_bad_bump() {
        assert!(EdgeEvaluation::new(2.0, 0.0, 2.2, 1.9, 0.0).is_err());
        assert!(EdgeEvaluation::new(2.0, -1.0, 2.2, 1.9, 0.0).is_err());
    }

    #[test]
    fn test_edge_evaluation_rejects_non_finite_theta() {
        assert!(EdgeEvaluation::new(f64::NAN, 1.0, 2.2, 1.9, 0.0).is_err());
        assert!(EdgeEvaluation::new(2.0, 1.0, f64::INFINITY, 1.9, 0.0).is_err());
    }
}
