//! Trajectory vertices and the edges an Euler step produces.

use super::cash_account::CashAccountEdge;
use super::error::DerivativeError;
use super::greek_vertex::PositionGreekVertex;
use super::portfolio_vertex::ReplicationPortfolioVertex;

/// Full trajectory state at one time node of one scenario path.
///
/// Bundles the replicating holdings, the derivative value and Greeks, the
/// default-contingent gains on either side's default, the applicable
/// collateral, and the hedge-error growth over the step that produced it.
/// Time is a year fraction measured from the walk's boundary condition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionTrajectoryVertex {
    time: f64,
    replication_portfolio: ReplicationPortfolioVertex,
    position_greek: PositionGreekVertex,
    gain_on_dealer_default: f64,
    gain_on_client_default: f64,
    collateral: f64,
    hedge_error_growth: f64,
}

impl EvolutionTrajectoryVertex {
    /// Creates a trajectory vertex.
    ///
    /// # Errors
    ///
    /// Returns `DerivativeError::NonFinite` if the time, either gain, the
    /// collateral, or the hedge-error growth is NaN or infinite.
    pub fn new(
        time: f64,
        replication_portfolio: ReplicationPortfolioVertex,
        position_greek: PositionGreekVertex,
        gain_on_dealer_default: f64,
        gain_on_client_default: f64,
        collateral: f64,
        hedge_error_growth: f64,
    ) -> Result<Self, DerivativeError> {
        if !time.is_finite() {
            return Err(DerivativeError::NonFinite("time"));
        }
        if !gain_on_dealer_default.is_finite() {
            return Err(DerivativeError::NonFinite("gain_on_dealer_default"));
        }
        if !gain_on_client_default.is_finite() {
            return Err(DerivativeError::NonFinite("gain_on_client_default"));
        }
        if !collateral.is_finite() {
            return Err(DerivativeError::NonFinite("collateral"));
        }
        if !hedge_error_growth.is_finite() {
            return Err(DerivativeError::NonFinite("hedge_error_growth"));
        }

        Ok(Self {
            time,
            replication_portfolio,
            position_greek,
            gain_on_dealer_default,
            gain_on_client_default,
            collateral,
            hedge_error_growth,
        })
    }

    /// Returns the vertex time as a year fraction.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the replicating portfolio holdings.
    #[inline]
    pub fn replication_portfolio(&self) -> &ReplicationPortfolioVertex {
        &self.replication_portfolio
    }

    /// Returns the derivative value and Greeks.
    #[inline]
    pub fn position_greek(&self) -> &PositionGreekVertex {
        &self.position_greek
    }

    /// Returns the dealer's gain upon its own default.
    #[inline]
    pub fn gain_on_dealer_default(&self) -> f64 {
        self.gain_on_dealer_default
    }

    /// Returns the dealer's gain upon the client's default.
    #[inline]
    pub fn gain_on_client_default(&self) -> f64 {
        self.gain_on_client_default
    }

    /// Returns the applicable collateral.
    #[inline]
    pub fn collateral(&self) -> f64 {
        self.collateral
    }

    /// Returns the hedge-error growth over the producing step.
    #[inline]
    pub fn hedge_error_growth(&self) -> f64 {
        self.hedge_error_growth
    }
}

/// One Euler step: the known start vertex, the newly built finish vertex,
/// and the cash flows accrued between them. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionTrajectoryEdge {
    start: EvolutionTrajectoryVertex,
    finish: EvolutionTrajectoryVertex,
    cash_account_edge: CashAccountEdge,
}

impl EvolutionTrajectoryEdge {
    /// Creates a trajectory edge from its two vertices and the step's cash
    /// account edge.
    #[inline]
    pub fn new(
        start: EvolutionTrajectoryVertex,
        finish: EvolutionTrajectoryVertex,
        cash_account_edge: CashAccountEdge,
    ) -> Self {
        Self {
            start,
            finish,
            cash_account_edge,
        }
    }

    /// Returns the start vertex.
    #[inline]
    pub fn start(&self) -> &EvolutionTrajectoryVertex {
        &self.start
    }

    /// Returns the finish vertex.
    #[inline]
    pub fn finish(&self) -> &EvolutionTrajectoryVertex {
        &self.finish
    }

    /// Returns the step's cash account edge.
    #[inline]
    pub fn cash_account_edge(&self) -> CashAccountEdge {
        self.cash_account_edge
    }
}
