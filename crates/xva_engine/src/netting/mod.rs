//! Netting aggregation: credit/debt groups rolled up to a funding group.
//!
//! A funding group owns one or more credit/debt netting groups sharing one
//! market scenario. Exposure and spread-01 series aggregate index-wise
//! across groups (linearity of netting); unilateral and bilateral
//! quantities are floored at zero after summation while symmetric
//! quantities never are.
//!
//! - [`CreditDebtGroupPath`] - per-group input series, validated once at
//!   construction
//! - [`FundingGroupPath`] - the aggregation engine
//! - [`FundingAdjustmentScheme`] - the cost/benefit/value/debt
//!   decomposition strategies

mod error;
mod funding;
mod group;
mod scheme;

pub use error::NettingError;
pub use funding::FundingGroupPath;
pub use group::{CreditDebtGroupPath, ExposureSeries, FundingSpreadSeries, GroupAdjustments};
pub use scheme::{
    BilateralFundingScheme, FundingAdjustmentScheme, SymmetricFundingScheme,
    UnilateralFundingScheme,
};
