//! # xva_core: Market Universe Foundation for XVA Valuation
//!
//! Foundation layer for the XVA workspace, providing:
//! - Market scenario data model: `MarketVertex`, `MarketEdge`, `MarketPath`
//!   (`universe`)
//! - Close-out policies applied on counterparty default (`closeout`)
//! - Actual/365.25 day-count helpers (`types::time`)
//! - Error types: `MarketError`, `CloseOutError` (`types::error`)
//!
//! The market universe is pure data: a scenario generator upstream produces
//! an ordered sequence of `MarketVertex` snapshots, and the evolution engine
//! in `xva_engine` consumes them through `MarketEdge` pairs. Nothing here
//! generates scenarios, fits curves, or prices instruments.
//!
//! ## Example
//!
//! ```
//! use xva_core::universe::{MarketPath, MarketVertex, MarketVertexEntity};
//!
//! let dealer = MarketVertexEntity::new(1.0, None, 0.4, 0.01).unwrap();
//! let client = MarketVertexEntity::new(1.0, None, 0.75, 0.02).unwrap();
//!
//! let vertex = MarketVertex::new(0.0, 100.0, dealer, client, 1.0).unwrap();
//! let path = MarketPath::new(vec![vertex]).unwrap();
//!
//! assert_eq!(path.vertex_count(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the universe types

#![warn(missing_docs)]

pub mod closeout;
pub mod types;
pub mod universe;

// Re-export commonly used types
pub use closeout::{CloseOut, CloseOutBilateral, CloseOutConvention};
pub use types::error::{CloseOutError, MarketError};
pub use universe::{MarketEdge, MarketPath, MarketVertex, MarketVertexEntity};
