//! Integration tests for market universe construction and close-out rules.

use approx::assert_relative_eq;

use xva_core::closeout::{CloseOut, CloseOutConvention};
use xva_core::types::time::{year_fraction, DAYS_PER_YEAR};
use xva_core::universe::{MarketEdge, MarketPath, MarketVertex, MarketVertexEntity};

fn vertex(anchor: f64) -> MarketVertex {
    MarketVertex::new(
        anchor,
        100.0,
        MarketVertexEntity::new(1.0, Some(0.9), 0.4, 0.01).unwrap(),
        MarketVertexEntity::new(1.0, None, 0.75, 0.02).unwrap(),
        1.0,
    )
    .unwrap()
}

#[test]
fn day_count_follows_actual_365_25() {
    assert_relative_eq!(year_fraction(DAYS_PER_YEAR), 1.0, epsilon = 1e-15);
    assert_relative_eq!(year_fraction(91.3125), 0.25, epsilon = 1e-15);
}

#[test]
fn path_and_edge_agree_on_time_increments() {
    let path = MarketPath::new(vec![vertex(0.0), vertex(182.625), vertex(365.25)]).unwrap();

    let first = path.edge(0).unwrap();
    let second = path.edge(1).unwrap();

    assert_relative_eq!(first.time_increment(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(
        first.time_increment() + second.time_increment(),
        1.0,
        epsilon = 1e-12
    );
}

#[test]
fn edge_construction_enforces_time_ordering() {
    let early = vertex(0.0);
    let late = vertex(30.0);

    assert!(MarketEdge::new(&early, &late).is_ok());
    assert!(MarketEdge::new(&late, &early).is_err());
    assert!(MarketEdge::new(&early, &early).is_err());
}

#[test]
fn bilateral_close_out_brackets_the_pre_default_value() {
    let policy = CloseOut::bilateral(0.4, 0.75).unwrap();

    for value in [0.0, 0.01, 1.0, 250.0] {
        assert!(policy.client_default(value) <= value);
        assert!(value <= policy.dealer_default(value));
    }

    // Liability-side values flip the bite: dealer recovery applies on the
    // dealer's own default, the full value on the client's.
    assert_relative_eq!(policy.dealer_default(-100.0), -40.0, epsilon = 1e-12);
    assert_relative_eq!(policy.client_default(-100.0), -100.0, epsilon = 1e-12);
}

#[test]
fn convention_round_trips_to_a_policy() {
    let policy = CloseOutConvention::default().policy(0.4, 0.75).unwrap();

    assert_relative_eq!(policy.client_default(10.0), 7.5, epsilon = 1e-12);
    assert!(CloseOutConvention::Bilateral.policy(-0.1, 0.75).is_err());
}

#[test]
fn path_rejects_degenerate_inputs() {
    assert!(MarketPath::new(Vec::new()).is_err());
    assert!(MarketPath::new(vec![vertex(10.0), vertex(10.0)]).is_err());
    assert!(MarketPath::new(vec![vertex(10.0), vertex(5.0)]).is_err());
}
