//! Trajectory state of the replicating portfolio and derivative value.
//!
//! One scenario path carries one [`EvolutionTrajectoryVertex`] per time node
//! and one [`EvolutionTrajectoryEdge`] per Euler step between adjacent
//! nodes. A vertex owns its replication holdings and position Greeks; an
//! edge additionally owns the cash flows accrued over the step.

mod cash_account;
mod error;
mod greek_vertex;
mod portfolio_vertex;
mod trajectory;

pub use cash_account::{CashAccountEdge, CashAccountRebalancer};
pub use error::DerivativeError;
pub use greek_vertex::PositionGreekVertex;
pub use portfolio_vertex::ReplicationPortfolioVertex;
pub use trajectory::{EvolutionTrajectoryEdge, EvolutionTrajectoryVertex};
