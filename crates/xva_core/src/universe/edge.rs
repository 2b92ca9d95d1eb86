//! Adjacent vertex pair of a market path.

use crate::types::error::MarketError;
use crate::types::time::year_fraction;

use super::vertex::MarketVertex;

/// Ordered pair of adjacent market vertices.
///
/// Edges are constructed on demand from a vertex sequence; they borrow their
/// endpoints and are never mutated. The elapsed time over the edge is
/// exposed both as raw days (`vertex_increment`) and as an Actual/365.25
/// year fraction (`time_increment`).
///
/// # Examples
///
/// ```
/// use xva_core::universe::{MarketEdge, MarketVertex, MarketVertexEntity};
///
/// let entity = MarketVertexEntity::new(1.0, None, 0.4, 0.01).unwrap();
/// let start = MarketVertex::new(0.0, 100.0, entity, entity, 1.0).unwrap();
/// let finish = MarketVertex::new(365.25, 101.0, entity, entity, 1.0).unwrap();
///
/// let edge = MarketEdge::new(&start, &finish).unwrap();
/// assert_eq!(edge.time_increment(), 1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MarketEdge<'a> {
    start: &'a MarketVertex,
    finish: &'a MarketVertex,
}

impl<'a> MarketEdge<'a> {
    /// Creates an edge over an adjacent vertex pair.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::NonIncreasingAnchor` unless the finish vertex
    /// anchor strictly exceeds the start vertex anchor.
    pub fn new(start: &'a MarketVertex, finish: &'a MarketVertex) -> Result<Self, MarketError> {
        if finish.anchor() <= start.anchor() {
            return Err(MarketError::NonIncreasingAnchor {
                start: start.anchor(),
                finish: finish.anchor(),
            });
        }

        Ok(Self { start, finish })
    }

    /// Returns the start vertex.
    #[inline]
    pub fn start(&self) -> &MarketVertex {
        self.start
    }

    /// Returns the finish vertex.
    #[inline]
    pub fn finish(&self) -> &MarketVertex {
        self.finish
    }

    /// Returns the elapsed time over the edge in raw days.
    #[inline]
    pub fn vertex_increment(&self) -> f64 {
        self.finish.anchor() - self.start.anchor()
    }

    /// Returns the elapsed time over the edge as an Actual/365.25 year fraction.
    #[inline]
    pub fn time_increment(&self) -> f64 {
        year_fraction(self.vertex_increment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::MarketVertexEntity;
    use approx::assert_relative_eq;

    fn vertex(anchor: f64) -> MarketVertex {
        let entity = MarketVertexEntity::new(1.0, None, 0.4, 0.01).unwrap();
        MarketVertex::new(anchor, 100.0, entity, entity, 1.0).unwrap()
    }

    #[test]
    fn test_edge_increments() {
        let start = vertex(0.0);
        let finish = vertex(365.25);
        let edge = MarketEdge::new(&start, &finish).unwrap();

        assert_eq!(edge.vertex_increment(), 365.25);
        assert_eq!(edge.time_increment(), 1.0);
    }

    #[test]
    fn test_edge_sub_year_increment() {
        let start = vertex(10.0);
        let finish = vertex(101.3125);
        let edge = MarketEdge::new(&start, &finish).unwrap();

        assert_relative_eq!(edge.time_increment(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_edge_rejects_non_increasing_anchor() {
        let start = vertex(10.0);
        let same = vertex(10.0);
        let earlier = vertex(5.0);

        assert!(MarketEdge::new(&start, &same).is_err());
        assert!(MarketEdge::new(&start, &earlier).is_err());
    }
}
