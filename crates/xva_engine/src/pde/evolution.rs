//! Euler evolution of the replication trajectory along a scenario path.
//!
//! Implements the dynamically adaptive trajectory evolution of Burgard and
//! Kjaer (2014). At each step the external PDE operator supplies theta and
//! its bumped variants; the scheme updates the derivative value and Greeks,
//! applies the close-out convention at the step's finish state, rebalances
//! the self-financing cash account, and reassembles the replicating
//! holdings:
//!
//! ```text
//! V(t + dt)      = V(t) - theta · dt
//! delta(t + dt)  = delta(t) + (theta_up - theta_down) · dt / (2 · bump)
//! gamma(t + dt)  = gamma(t) + (theta_up + theta_down - 2 · theta) · dt / bump²
//! ```
//!
//! A step that cannot be evaluated yields `None` and aborts the walk; there
//! is no partial result.

use tracing::debug;

use xva_core::universe::{MarketEdge, MarketVertex};

use crate::derivative::{
    CashAccountEdge, CashAccountRebalancer, EvolutionTrajectoryEdge, EvolutionTrajectoryVertex,
    PositionGreekVertex, ReplicationPortfolioVertex,
};

use super::control::PdeEvolutionControl;
use super::operator::PdeOperator;
use super::tradeables::TradeablesContainer;

/// Evolves a replication trajectory one Euler step at a time.
///
/// Owns the universe of tradeables and the evolution control settings;
/// market state and the PDE operator are supplied per call, so one scheme
/// serves every path of a scenario set.
#[derive(Clone, Copy, Debug)]
pub struct TrajectoryEvolutionScheme {
    tradeables: TradeablesContainer,
    control: PdeEvolutionControl,
}

impl TrajectoryEvolutionScheme {
    /// Creates an evolution scheme over the given tradeables universe and
    /// control settings.
    #[inline]
    pub fn new(tradeables: TradeablesContainer, control: PdeEvolutionControl) -> Self {
        Self {
            tradeables,
            control,
        }
    }

    /// Returns the universe of tradeables.
    #[inline]
    pub fn tradeables(&self) -> &TradeablesContainer {
        &self.tradeables
    }

    /// Returns the evolution control settings.
    #[inline]
    pub fn control(&self) -> &PdeEvolutionControl {
        &self.control
    }

    /// Rebalances the cash account over one market edge and derives the
    /// derivative value update implied by self-financing replication.
    ///
    /// Returns `None` when the resulting quantities cannot form valid
    /// state, for instance when a replicator degenerates and the arithmetic
    /// produces a non-finite value.
    pub fn rebalance_cash(
        &self,
        start_vertex: &EvolutionTrajectoryVertex,
        market_edge: &MarketEdge<'_>,
    ) -> Option<CashAccountRebalancer> {
        let portfolio = start_vertex.replication_portfolio();

        let position_holdings = portfolio.position_holdings();

        let dealer_senior_holdings = portfolio.dealer_senior_numeraire_holdings();

        let dealer_subordinate_holdings = portfolio.dealer_subordinate_numeraire_holdings();

        let client_holdings = portfolio.client_numeraire_holdings();

        let start_market = market_edge.start();

        let finish_market = market_edge.finish();

        let start_dealer = start_market.dealer();

        let finish_dealer = finish_market.dealer();

        let finish_client = finish_market.client();

        let finish_position_value = finish_market.position_manifest_value();

        let finish_dealer_senior_replicator = finish_dealer.senior_funding_replicator();

        let finish_client_replicator = finish_client.senior_funding_replicator();

        let time_increment = market_edge.time_increment();

        let position_cash_change = position_holdings
            * self.tradeables.position().cash_accumulation_rate()
            * finish_position_value
            * time_increment;

        let client_cash_accumulation = client_holdings
            * self.tradeables.client_funding().cash_accumulation_rate()
            * finish_client_replicator
            * time_increment;

        let client_holdings_value_change = client_holdings
            * (finish_client_replicator - start_market.client().senior_funding_replicator());

        let mut cash_account_balance = -start_vertex.position_greek().derivative_xva_value()
            - dealer_senior_holdings * finish_dealer_senior_replicator;

        if let Some(finish_subordinate) = finish_dealer.subordinate_funding_replicator() {
            cash_account_balance -= dealer_subordinate_holdings * finish_subordinate;
        }

        // A positive balance earns the collateral rate; a deficit is
        // financed at the dealer's senior funding rate.
        let dealer_cash_accumulation = cash_account_balance
            * if cash_account_balance > 0.0 {
                self.tradeables.csa().cash_accumulation_rate()
            } else {
                self.tradeables.dealer_senior_funding().cash_accumulation_rate()
            }
            * time_increment;

        let mut derivative_xva_value_change = -(position_holdings
            * (finish_position_value - start_market.position_manifest_value())
            + dealer_senior_holdings
                * (finish_dealer_senior_replicator - start_dealer.senior_funding_replicator())
            + client_holdings_value_change
            + (position_cash_change + client_cash_accumulation + dealer_cash_accumulation)
                * time_increment);

        // The subordinate leg participates only when both bounding
        // replicators exist.
        if let (Some(start_subordinate), Some(finish_subordinate)) = (
            start_dealer.subordinate_funding_replicator(),
            finish_dealer.subordinate_funding_replicator(),
        ) {
            derivative_xva_value_change +=
                dealer_subordinate_holdings * (finish_subordinate - start_subordinate);
        }

        let cash_account_edge = CashAccountEdge::new(
            position_cash_change,
            dealer_cash_accumulation * time_increment,
            client_cash_accumulation * time_increment,
        )
        .ok()?;

        CashAccountRebalancer::new(cash_account_edge, derivative_xva_value_change).ok()
    }

    /// Executes a single Euler step over one market edge.
    ///
    /// Returns the trajectory edge joining `start_vertex` to the newly
    /// built finish vertex, or `None` when the PDE operator declines the
    /// edge or the step state cannot be formed.
    pub fn euler_step<O: PdeOperator>(
        &self,
        market_edge: &MarketEdge<'_>,
        operator: &O,
        start_vertex: &EvolutionTrajectoryVertex,
        collateral: f64,
    ) -> Option<EvolutionTrajectoryEdge> {
        let start_greek = start_vertex.position_greek();

        let evaluation = operator.edge_run(market_edge, start_vertex, collateral)?;

        let start_time = start_vertex.time();

        let time_increment = market_edge.time_increment();

        let theta = evaluation.theta();

        let position_value_bump = evaluation.position_value_bump();

        let theta_position_value_up = evaluation.theta_position_value_up();

        let theta_position_value_down = evaluation.theta_position_value_down();

        let finish_market = market_edge.finish();

        let finish_dealer = finish_market.dealer();

        let finish_client = finish_market.client();

        let derivative_xva_value_delta_finish = start_greek.derivative_xva_value_delta()
            + 0.5 * (theta_position_value_up - theta_position_value_down) * time_increment
                / position_value_bump;

        let derivative_xva_value_finish =
            start_greek.derivative_xva_value() - theta * time_increment;

        let close_out = self
            .control
            .close_out()
            .policy(
                finish_dealer.senior_recovery_rate(),
                finish_client.senior_recovery_rate(),
            )
            .ok()?;

        let client_gain_on_dealer_default = close_out.dealer_default(derivative_xva_value_finish);

        let gain_on_client_default = -(derivative_xva_value_finish
            - close_out.client_default(derivative_xva_value_finish));

        let gain_on_dealer_default =
            -(derivative_xva_value_finish - client_gain_on_dealer_default);

        let client_holdings_finish =
            gain_on_client_default / finish_client.senior_funding_replicator();

        let rebalancer = self.rebalance_cash(start_vertex, market_edge)?;

        let cash_account_edge = rebalancer.cash_account_edge();

        let replication_portfolio_finish = ReplicationPortfolioVertex::new(
            -derivative_xva_value_delta_finish,
            gain_on_dealer_default / finish_dealer.senior_funding_replicator(),
            finish_dealer
                .subordinate_funding_replicator()
                .map_or(0.0, |subordinate| gain_on_dealer_default / subordinate),
            client_holdings_finish,
            start_vertex.replication_portfolio().cash_account_balance()
                + cash_account_edge.accumulation(),
        )
        .ok()?;

        let position_greek_finish = PositionGreekVertex::new(
            derivative_xva_value_finish,
            derivative_xva_value_delta_finish,
            start_greek.derivative_xva_value_gamma()
                + (theta_position_value_up + theta_position_value_down - 2.0 * theta)
                    * time_increment
                    / (position_value_bump * position_value_bump),
            start_greek.derivative_fair_value()
                * (-time_increment * self.tradeables.csa().drift_rate()).exp(),
        )
        .ok()?;

        let finish_vertex = EvolutionTrajectoryVertex::new(
            start_time + time_increment,
            replication_portfolio_finish,
            position_greek_finish,
            gain_on_dealer_default,
            gain_on_client_default,
            collateral,
            evaluation.hedge_error_growth(),
        )
        .ok()?;

        Some(EvolutionTrajectoryEdge::new(
            *start_vertex,
            finish_vertex,
            cash_account_edge,
        ))
    }

    /// Executes a sequential Euler walk over a market vertex sequence.
    ///
    /// Vertices are consumed in the order supplied; each step's finish
    /// vertex seeds the next step, so the returned edges chain with
    /// `edges[i].finish() == edges[i + 1].start()`. Returns `None` when the
    /// sequence has fewer than two vertices or any step fails; no partial
    /// trajectory is produced.
    pub fn euler_walk<O: PdeOperator>(
        &self,
        market_vertexes: &[MarketVertex],
        operator: &O,
        boundary_vertex: &EvolutionTrajectoryVertex,
        collateral: f64,
    ) -> Option<Vec<EvolutionTrajectoryEdge>> {
        if market_vertexes.len() < 2 {
            debug!(
                vertex_count = market_vertexes.len(),
                "euler walk needs at least two market vertexes"
            );

            return None;
        }

        let mut trajectory_edges = Vec::with_capacity(market_vertexes.len() - 1);

        let mut trajectory_vertex = *boundary_vertex;

        for (step_index, window) in market_vertexes.windows(2).enumerate() {
            let market_edge = match MarketEdge::new(&window[0], &window[1]) {
                Ok(edge) => edge,
                Err(error) => {
                    debug!(step_index, %error, "euler walk aborted on a degenerate market edge");

                    return None;
                }
            };

            let Some(trajectory_edge) =
                self.euler_step(&market_edge, operator, &trajectory_vertex, collateral)
            else {
                debug!(step_index, "euler walk aborted on an unevaluable step");

                return None;
            };

            trajectory_vertex = *trajectory_edge.finish();

            trajectory_edges.push(trajectory_edge);
        }

        Some(trajectory_edges)
    }
}
