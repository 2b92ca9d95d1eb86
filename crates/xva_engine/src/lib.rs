//! # xva_engine: Netting Aggregation and PDE Trajectory Evolution
//!
//! The two core XVA subsystems, built on the market universe in `xva_core`:
//!
//! - `derivative/` - replication-portfolio and derivative-value state along
//!   one trajectory (vertices, cash-account edges, trajectory edges)
//! - `pde/` - the Burgard–Kjaer-style Euler walk: tradeables container,
//!   PDE operator seam, and the trajectory evolution scheme
//! - `netting/` - roll-up of credit/debt netting group series into
//!   funding-group valuation adjustments under the symmetric, unilateral
//!   and bilateral conventions
//! - `parallel/` - rayon driver evolving many independent scenario paths
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  xva_engine                  │
//! ├──────────────────────────────────────────────┤
//! │  pde/        - Euler walk over market edges  │
//! │  derivative/ - trajectory state it evolves   │
//! │  netting/    - funding-group aggregation     │
//! │  parallel/   - one walk per scenario path    │
//! └──────────────────────────────────────────────┘
//!          ↓
//! ┌──────────────────────────────────────────────┐
//! │                  xva_core                    │
//! │  market universe, close-out, day count       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Error model
//!
//! Construction-time invalid input fails fast with a `Result`; a step-time
//! state that cannot be evaluated (PDE evaluation, cash rebalance or
//! close-out could not be formed) surfaces as `None`, letting a multi-step
//! walk abort cleanly at the first unusable step. An empty walk result means
//! "path could not be evolved to completion"; no partial results are
//! returned.

#![warn(missing_docs)]

pub mod derivative;
pub mod netting;
pub mod parallel;
pub mod pde;

// Re-export commonly used types
pub use derivative::{
    CashAccountEdge, CashAccountRebalancer, EvolutionTrajectoryEdge, EvolutionTrajectoryVertex,
    PositionGreekVertex, ReplicationPortfolioVertex,
};
pub use netting::{
    BilateralFundingScheme, CreditDebtGroupPath, FundingAdjustmentScheme, FundingGroupPath,
    SymmetricFundingScheme, UnilateralFundingScheme,
};
pub use pde::{
    EdgeEvaluation, PdeEvolutionControl, PdeOperator, PrimarySecurity, TradeablesContainer,
    TrajectoryEvolutionScheme,
};
