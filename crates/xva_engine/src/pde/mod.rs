//! PDE Euler walk over a market scenario.
//!
//! The valuation follows Burgard and Kjaer (2014): the derivative value and
//! its replicating portfolio satisfy a PDE whose source term (theta) is
//! evaluated by an external operator; this module advances the coupled
//! system one Euler step at a time along a single scenario path.
//!
//! - [`PrimarySecurity`] / [`TradeablesContainer`] - the universe of
//!   tradeable numeraires and their accrual/drift rates
//! - [`PdeOperator`] / [`EdgeEvaluation`] - the seam to the external PDE
//!   right-hand-side evaluation
//! - [`PdeEvolutionControl`] - control settings for the walk
//! - [`TrajectoryEvolutionScheme`] - cash rebalancing, single Euler step,
//!   and the multi-step walk

mod control;
mod error;
mod evolution;
mod operator;
mod tradeables;

pub use control::PdeEvolutionControl;
pub use error::EvolutionError;
pub use evolution::TrajectoryEvolutionScheme;
pub use operator::{EdgeEvaluation, PdeOperator};
pub use tradeables::{PrimarySecurity, TradeablesContainer};
