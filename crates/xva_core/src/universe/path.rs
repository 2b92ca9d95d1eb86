//! Full vertex sequence for one scenario.

use crate::types::error::MarketError;

use super::edge::MarketEdge;
use super::vertex::MarketVertex;

/// Ordered sequence of market vertices for one simulated scenario.
///
/// The vertex count is fixed per path; anchors are strictly increasing.
/// Downstream, per-vertex series carry one value per vertex (length N) and
/// per-period series one value per adjacent pair (length N−1).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketPath {
    vertexes: Vec<MarketVertex>,
}

impl MarketPath {
    /// Creates a market path from an ordered vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::EmptyPath` for an empty sequence, or
    /// `MarketError::NonIncreasingAnchor` if any adjacent anchors are not
    /// strictly increasing.
    pub fn new(vertexes: Vec<MarketVertex>) -> Result<Self, MarketError> {
        if vertexes.is_empty() {
            return Err(MarketError::EmptyPath);
        }
        for pair in vertexes.windows(2) {
            if pair[1].anchor() <= pair[0].anchor() {
                return Err(MarketError::NonIncreasingAnchor {
                    start: pair[0].anchor(),
                    finish: pair[1].anchor(),
                });
            }
        }

        Ok(Self { vertexes })
    }

    /// Returns the vertex sequence.
    #[inline]
    pub fn vertexes(&self) -> &[MarketVertex] {
        &self.vertexes
    }

    /// Returns the number of vertices N.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    /// Returns the number of periods N−1.
    #[inline]
    pub fn period_count(&self) -> usize {
        self.vertexes.len() - 1
    }

    /// Returns the edge over period `index`, or `None` past the last period.
    pub fn edge(&self, index: usize) -> Option<MarketEdge<'_>> {
        if index + 1 >= self.vertexes.len() {
            return None;
        }
        // Anchors were validated strictly increasing at construction.
        MarketEdge::new(&self.vertexes[index], &self.vertexes[index + 1]).ok()
    }
}
