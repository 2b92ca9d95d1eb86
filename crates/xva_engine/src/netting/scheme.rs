//! Funding adjustment decomposition strategies.
//!
//! Which convention a deployment reports as "the" funding value adjustment,
//! and how it splits cost from benefit, is a policy choice rather than a
//! fixed formula. The [`FundingAdjustmentScheme`] trait exposes the four
//! scalar and four period-wise accessors; the concrete schemes assemble
//! them from the symmetric/unilateral/bilateral primitives already computed
//! on [`FundingGroupPath`].

use super::funding::FundingGroupPath;

/// Decomposition of funding adjustments into value, debt, cost and benefit
/// components, scalar and period-wise.
pub trait FundingAdjustmentScheme {
    /// Path funding value adjustment.
    fn funding_value_adjustment(&self, path: &FundingGroupPath) -> f64;

    /// Path funding debt adjustment.
    fn funding_debt_adjustment(&self, path: &FundingGroupPath) -> f64;

    /// Path funding cost adjustment.
    fn funding_cost_adjustment(&self, path: &FundingGroupPath) -> f64;

    /// Path funding benefit adjustment.
    fn funding_benefit_adjustment(&self, path: &FundingGroupPath) -> f64;

    /// Period-wise funding value adjustment.
    fn period_funding_value_adjustment(&self, path: &FundingGroupPath) -> Vec<f64>;

    /// Period-wise funding debt adjustment.
    fn period_funding_debt_adjustment(&self, path: &FundingGroupPath) -> Vec<f64>;

    /// Period-wise funding cost adjustment.
    fn period_funding_cost_adjustment(&self, path: &FundingGroupPath) -> Vec<f64>;

    /// Period-wise funding benefit adjustment.
    fn period_funding_benefit_adjustment(&self, path: &FundingGroupPath) -> Vec<f64>;
}

/// Symmetric decomposition: the unfloored funding value against a
/// unilateral cost and a bilateral debt/benefit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymmetricFundingScheme;

impl FundingAdjustmentScheme for SymmetricFundingScheme {
    fn funding_value_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.symmetric_funding_value_adjustment()
    }

    fn funding_debt_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.bilateral_funding_debt_adjustment()
    }

    fn funding_cost_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.unilateral_funding_value_adjustment()
    }

    fn funding_benefit_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.bilateral_funding_debt_adjustment()
    }

    fn period_funding_value_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_symmetric_funding_value_adjustment()
    }

    fn period_funding_debt_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_bilateral_funding_debt_adjustment()
    }

    fn period_funding_cost_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_unilateral_funding_value_adjustment()
    }

    fn period_funding_benefit_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_bilateral_funding_debt_adjustment()
    }
}

/// Unilateral decomposition: only the dealer's own funding counted on both
/// the value/cost and debt/benefit sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnilateralFundingScheme;

impl FundingAdjustmentScheme for UnilateralFundingScheme {
    fn funding_value_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.unilateral_funding_value_adjustment()
    }

    fn funding_debt_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.unilateral_funding_debt_adjustment()
    }

    fn funding_cost_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.unilateral_funding_value_adjustment()
    }

    fn funding_benefit_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.unilateral_funding_debt_adjustment()
    }

    fn period_funding_value_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_unilateral_funding_value_adjustment()
    }

    fn period_funding_debt_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_unilateral_funding_debt_adjustment()
    }

    fn period_funding_cost_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_unilateral_funding_value_adjustment()
    }

    fn period_funding_benefit_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_unilateral_funding_debt_adjustment()
    }
}

/// Bilateral decomposition: both sides netted on the value/cost and
/// debt/benefit sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BilateralFundingScheme;

impl FundingAdjustmentScheme for BilateralFundingScheme {
    fn funding_value_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.bilateral_funding_value_adjustment()
    }

    fn funding_debt_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.bilateral_funding_debt_adjustment()
    }

    fn funding_cost_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.bilateral_funding_value_adjustment()
    }

    fn funding_benefit_adjustment(&self, path: &FundingGroupPath) -> f64 {
        path.bilateral_funding_debt_adjustment()
    }

    fn period_funding_value_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_bilateral_funding_value_adjustment()
    }

    fn period_funding_debt_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_bilateral_funding_debt_adjustment()
    }

    fn period_funding_cost_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_bilateral_funding_value_adjustment()
    }

    fn period_funding_benefit_adjustment(&self, path: &FundingGroupPath) -> Vec<f64> {
        path.period_bilateral_funding_debt_adjustment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use xva_core::universe::{MarketPath, MarketVertex, MarketVertexEntity};

    use crate::netting::group::{
        CreditDebtGroupPath, ExposureSeries, FundingSpreadSeries, GroupAdjustments,
    };

    fn funding_path() -> FundingGroupPath {
        let vertexes = vec![
            MarketVertex::new(
                0.0,
                100.0,
                MarketVertexEntity::new(1.0, None, 0.4, 0.01).unwrap(),
                MarketVertexEntity::new(1.0, None, 0.75, 0.02).unwrap(),
                1.0,
            )
            .unwrap(),
            MarketVertex::new(
                365.25,
                110.0,
                MarketVertexEntity::new(1.04, None, 0.4, 0.02).unwrap(),
                MarketVertexEntity::new(1.05, None, 0.75, 0.02).unwrap(),
                1.02,
            )
            .unwrap(),
        ];

        let exposure = ExposureSeries::new(
            vec![10.0, 12.0],
            vec![10.0, 12.0],
            vec![0.0, 0.0],
            vec![9.5, 11.0],
            vec![9.5, 11.0],
            vec![0.0, 0.0],
        )
        .unwrap();

        let group = CreditDebtGroupPath::new(
            exposure.clone(),
            exposure,
            vec![1.0, 1.0],
            vec![0.95, 0.9],
            FundingSpreadSeries::new(
                vec![100.0],
                vec![60.0],
                vec![40.0],
                vec![2.0],
                vec![1.0],
            )
            .unwrap(),
            GroupAdjustments::new(1.0, 0.8, 0.2, -0.5, -0.4, -0.1, 0.3, 0.25).unwrap(),
        )
        .unwrap();

        FundingGroupPath::new(vec![group], MarketPath::new(vertexes).unwrap()).unwrap()
    }

    #[test]
    fn test_symmetric_scheme_mapping() {
        let path = funding_path();
        let scheme = SymmetricFundingScheme;

        // value: +0.5 · 100 · (0.01 + 0.02), cost: the unilateral variant.
        assert_relative_eq!(scheme.funding_value_adjustment(&path), 1.5, epsilon = 1e-12);
        assert_relative_eq!(scheme.funding_cost_adjustment(&path), -0.9, epsilon = 1e-12);
        assert_relative_eq!(scheme.funding_debt_adjustment(&path), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            scheme.funding_benefit_adjustment(&path),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unilateral_scheme_mapping() {
        let path = funding_path();
        let scheme = UnilateralFundingScheme;

        assert_relative_eq!(
            scheme.funding_value_adjustment(&path),
            -0.9,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            scheme.funding_cost_adjustment(&path),
            scheme.funding_value_adjustment(&path),
            epsilon = 1e-12
        );
        assert_relative_eq!(scheme.funding_debt_adjustment(&path), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bilateral_scheme_mapping() {
        let path = funding_path();
        let scheme = BilateralFundingScheme;

        assert_relative_eq!(
            scheme.funding_value_adjustment(&path),
            -0.6,
            epsilon = 1e-12
        );
        assert_relative_eq!(scheme.funding_debt_adjustment(&path), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_period_series_match_scalar_roll_ups() {
        let path = funding_path();

        for scheme in [
            &SymmetricFundingScheme as &dyn FundingAdjustmentScheme,
            &UnilateralFundingScheme,
            &BilateralFundingScheme,
        ] {
            let period_debt = scheme.period_funding_debt_adjustment(&path);
            assert_eq!(period_debt.len(), 1);
            assert_relative_eq!(
                period_debt.iter().sum::<f64>(),
                scheme.funding_debt_adjustment(&path),
                epsilon = 1e-12
            );
        }
    }
}
