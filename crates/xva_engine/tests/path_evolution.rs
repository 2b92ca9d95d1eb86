//! Integration tests for the Euler trajectory evolution over full paths.

use approx::assert_relative_eq;

use xva_core::closeout::CloseOutConvention;
use xva_core::universe::{MarketEdge, MarketPath, MarketVertex, MarketVertexEntity};
use xva_engine::derivative::{
    EvolutionTrajectoryVertex, PositionGreekVertex, ReplicationPortfolioVertex,
};
use xva_engine::pde::{
    EdgeEvaluation, PdeEvolutionControl, PdeOperator, PrimarySecurity, TradeablesContainer,
    TrajectoryEvolutionScheme,
};

/// Theta proportional to the carried derivative value.
struct ProportionalThetaOperator {
    decay_rate: f64,
}

impl PdeOperator for ProportionalThetaOperator {
    fn edge_run(
        &self,
        _market_edge: &MarketEdge<'_>,
        start_vertex: &EvolutionTrajectoryVertex,
        _collateral: f64,
    ) -> Option<EdgeEvaluation> {
        let theta = self.decay_rate * start_vertex.position_greek().derivative_xva_value();

        EdgeEvaluation::new(theta, 1.0, theta, theta, 0.0).ok()
    }
}

/// Declines every edge past a given step count.
struct FailAfterOperator {
    allowed_steps: std::cell::Cell<usize>,
}

impl PdeOperator for FailAfterOperator {
    fn edge_run(
        &self,
        _market_edge: &MarketEdge<'_>,
        _start_vertex: &EvolutionTrajectoryVertex,
        _collateral: f64,
    ) -> Option<EdgeEvaluation> {
        let remaining = self.allowed_steps.get();
        if remaining == 0 {
            return None;
        }
        self.allowed_steps.set(remaining - 1);

        EdgeEvaluation::new(1.0, 1.0, 1.0, 1.0, 0.0).ok()
    }
}

fn market_vertex(anchor: f64, position_value: f64) -> MarketVertex {
    MarketVertex::new(
        anchor,
        position_value,
        MarketVertexEntity::new(1.0 + anchor / 10_000.0, None, 0.4, 0.012).unwrap(),
        MarketVertexEntity::new(1.0 + anchor / 8_000.0, None, 0.75, 0.02).unwrap(),
        1.0 + anchor / 20_000.0,
    )
    .unwrap()
}

fn quarterly_path(n_vertexes: usize) -> MarketPath {
    let vertexes = (0..n_vertexes)
        .map(|index| market_vertex(index as f64 * 91.3125, 100.0 + index as f64))
        .collect();

    MarketPath::new(vertexes).unwrap()
}

fn scheme() -> TrajectoryEvolutionScheme {
    TrajectoryEvolutionScheme::new(
        TradeablesContainer::new(
            PrimarySecurity::new(0.03, 0.0).unwrap(),
            PrimarySecurity::new(0.02, 0.015).unwrap(),
            PrimarySecurity::new(0.04, 0.0).unwrap(),
            None,
            PrimarySecurity::new(0.05, 0.0).unwrap(),
        ),
        PdeEvolutionControl::new(CloseOutConvention::Bilateral),
    )
}

fn boundary_vertex() -> EvolutionTrajectoryVertex {
    EvolutionTrajectoryVertex::new(
        0.0,
        ReplicationPortfolioVertex::new(-0.5, 0.1, 0.0, 0.2, 0.0).unwrap(),
        PositionGreekVertex::new(10.0, -0.5, 0.01, 10.0).unwrap(),
        0.0,
        0.0,
        0.0,
        0.0,
    )
    .unwrap()
}

#[test]
fn walk_returns_one_edge_per_period_with_chain_continuity() {
    let path = quarterly_path(9);
    let operator = ProportionalThetaOperator { decay_rate: 0.1 };

    let edges = scheme()
        .euler_walk(path.vertexes(), &operator, &boundary_vertex(), 0.0)
        .unwrap();

    assert_eq!(edges.len(), path.vertex_count() - 1);

    for pair in edges.windows(2) {
        assert_eq!(pair[0].finish(), pair[1].start());
    }

    assert_eq!(edges[0].start(), &boundary_vertex());
}

#[test]
fn one_year_edge_advances_time_by_one() {
    let start = market_vertex(0.0, 100.0);
    let finish = market_vertex(365.25, 104.0);
    let edge = MarketEdge::new(&start, &finish).unwrap();

    let operator = ProportionalThetaOperator { decay_rate: 0.1 };

    let trajectory_edge = scheme()
        .euler_step(&edge, &operator, &boundary_vertex(), 0.0)
        .unwrap();

    assert_relative_eq!(trajectory_edge.finish().time(), 1.0, epsilon = 1e-12);
}

#[test]
fn quarterly_walk_accumulates_quarter_year_times() {
    let path = quarterly_path(5);
    let operator = ProportionalThetaOperator { decay_rate: 0.1 };

    let edges = scheme()
        .euler_walk(path.vertexes(), &operator, &boundary_vertex(), 0.0)
        .unwrap();

    for (index, edge) in edges.iter().enumerate() {
        assert_relative_eq!(
            edge.finish().time(),
            0.25 * (index + 1) as f64,
            epsilon = 1e-12
        );
    }
}

#[test]
fn value_decays_by_theta_each_step() {
    let path = quarterly_path(5);
    let operator = ProportionalThetaOperator { decay_rate: 0.1 };

    let edges = scheme()
        .euler_walk(path.vertexes(), &operator, &boundary_vertex(), 0.0)
        .unwrap();

    // V -> V · (1 - 0.1 · 0.25) per quarter step.
    let mut expected = 10.0;
    for edge in &edges {
        expected *= 1.0 - 0.1 * 0.25;
        assert_relative_eq!(
            edge.finish().position_greek().derivative_xva_value(),
            expected,
            epsilon = 1e-9
        );
    }
}

#[test]
fn walk_aborts_entirely_on_mid_path_failure() {
    let path = quarterly_path(6);
    let operator = FailAfterOperator {
        allowed_steps: std::cell::Cell::new(3),
    };

    let result = scheme().euler_walk(path.vertexes(), &operator, &boundary_vertex(), 0.0);

    // No partial trajectory: three good steps are discarded with the walk.
    assert!(result.is_none());
}

#[test]
fn collateral_is_carried_onto_every_finish_vertex() {
    let path = quarterly_path(4);
    let operator = ProportionalThetaOperator { decay_rate: 0.1 };

    let edges = scheme()
        .euler_walk(path.vertexes(), &operator, &boundary_vertex(), 25.0)
        .unwrap();

    for edge in &edges {
        assert_relative_eq!(edge.finish().collateral(), 25.0, epsilon = 1e-12);
    }
}

#[test]
fn replication_holdings_track_close_out_gains() {
    let start = market_vertex(0.0, 100.0);
    let finish = market_vertex(365.25, 104.0);
    let edge = MarketEdge::new(&start, &finish).unwrap();

    let operator = ProportionalThetaOperator { decay_rate: 0.1 };

    let trajectory_edge = scheme()
        .euler_step(&edge, &operator, &boundary_vertex(), 0.0)
        .unwrap();

    let finish_vertex = trajectory_edge.finish();
    let portfolio = finish_vertex.replication_portfolio();

    // Client holdings replicate the client-default gain in the client
    // funding numeraire; dealer holdings the dealer-default gain.
    assert_relative_eq!(
        portfolio.client_numeraire_holdings()
            * edge.finish().client().senior_funding_replicator(),
        finish_vertex.gain_on_client_default(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        portfolio.dealer_senior_numeraire_holdings()
            * edge.finish().dealer().senior_funding_replicator(),
        finish_vertex.gain_on_dealer_default(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        portfolio.position_holdings(),
        -finish_vertex.position_greek().derivative_xva_value_delta(),
        epsilon = 1e-12
    );
}
