//! Market scenario universe.
//!
//! One simulated scenario is an ordered sequence of time-indexed market
//! snapshots:
//!
//! - [`MarketVertexEntity`]: the funding/credit state of one legal entity
//!   (the dealer or the client) at one time node
//! - [`MarketVertex`]: the full market snapshot at one time node
//! - [`MarketEdge`]: an adjacent vertex pair, constructed on demand
//! - [`MarketPath`]: the full vertex sequence for one scenario
//!
//! All of these are immutable once constructed. The scenario generator that
//! produces them is out of scope; this module only guarantees that whatever
//! it produces is internally consistent (finite values, positive
//! replicators, strictly increasing anchors).

mod edge;
mod entity;
mod path;
mod vertex;

pub use edge::MarketEdge;
pub use entity::MarketVertexEntity;
pub use path::MarketPath;
pub use vertex::MarketVertex;
