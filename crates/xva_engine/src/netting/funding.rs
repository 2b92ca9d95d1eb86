//! Funding-group roll-up of credit/debt netting group paths.

use xva_core::universe::MarketPath;

use super::error::NettingError;
use super::group::CreditDebtGroupPath;

/// Aggregates credit/debt group paths sharing one funding group and one
/// market scenario into funding-group-level valuation adjustments.
///
/// Every array metric is an index-wise sum over the child groups, computed
/// into a freshly allocated buffer per call. Unilateral and bilateral
/// quantities are floored at zero after summation; symmetric quantities are
/// never floored. Period adjustments convert a spread-01 series against the
/// dealer's senior funding spread at the bounding vertices:
///
/// ```text
/// adjustment[k] = 0.5 · spread01[k] · (dealer_spread[k] + dealer_spread[k + 1])
/// ```
///
/// The symmetric path adjustment is the added period sum; unilateral and
/// bilateral path adjustments are the subtracted period sums, presented as
/// a cost.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FundingGroupPath {
    group_paths: Vec<CreditDebtGroupPath>,
    market_path: MarketPath,
}

impl FundingGroupPath {
    /// Creates a funding group path over the given credit/debt groups and
    /// their shared market scenario.
    ///
    /// # Errors
    ///
    /// Returns `NettingError::EmptyGroupArray` when no groups are supplied,
    /// or `NettingError::GroupVertexCountMismatch` when a group's series
    /// are not aligned to the market path's vertex count.
    pub fn new(
        group_paths: Vec<CreditDebtGroupPath>,
        market_path: MarketPath,
    ) -> Result<Self, NettingError> {
        if group_paths.is_empty() {
            return Err(NettingError::EmptyGroupArray);
        }

        let vertex_count = market_path.vertex_count();

        for (group_index, group) in group_paths.iter().enumerate() {
            if group.vertex_count() != vertex_count {
                return Err(NettingError::GroupVertexCountMismatch {
                    group_index,
                    expected: vertex_count,
                    found: group.vertex_count(),
                });
            }
        }

        Ok(Self {
            group_paths,
            market_path,
        })
    }

    /// Returns the child credit/debt group paths.
    #[inline]
    pub fn group_paths(&self) -> &[CreditDebtGroupPath] {
        &self.group_paths
    }

    /// Returns the shared market path.
    #[inline]
    pub fn market_path(&self) -> &MarketPath {
        &self.market_path
    }

    /// Index-wise sum of one extracted series over the groups, with an
    /// optional zero floor applied after summation.
    fn aggregate_series<F>(&self, length: usize, floor: bool, extract: F) -> Vec<f64>
    where
        F: Fn(&CreditDebtGroupPath) -> &[f64],
    {
        let mut aggregate = vec![0.0; length];

        for group in &self.group_paths {
            for (total, value) in aggregate.iter_mut().zip(extract(group)) {
                *total += value;
            }
        }

        if floor {
            for total in &mut aggregate {
                if *total < 0.0 {
                    *total = 0.0;
                }
            }
        }

        aggregate
    }

    /// Sum of one extracted scalar over the groups.
    fn aggregate_scalar<F>(&self, extract: F) -> f64
    where
        F: Fn(&CreditDebtGroupPath) -> f64,
    {
        self.group_paths.iter().map(extract).sum()
    }

    /// Converts a period spread-01 series into a period adjustment series
    /// against the dealer senior funding spread at the bounding vertices.
    fn period_adjustment(&self, period_spread01: &[f64]) -> Vec<f64> {
        let vertexes = self.market_path.vertexes();

        period_spread01
            .iter()
            .enumerate()
            .map(|(period_index, spread01)| {
                0.5 * spread01
                    * (vertexes[period_index].dealer().senior_funding_spread()
                        + vertexes[period_index + 1].dealer().senior_funding_spread())
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Funding value spread-01
    // ------------------------------------------------------------------

    /// Path symmetric funding value spread-01: plain sum over groups.
    pub fn symmetric_funding_value_spread01(&self) -> f64 {
        self.aggregate_scalar(CreditDebtGroupPath::symmetric_funding_value_spread01)
    }

    /// Path unilateral funding value spread-01, floored at zero after the
    /// sum.
    pub fn unilateral_funding_value_spread01(&self) -> f64 {
        self.aggregate_scalar(CreditDebtGroupPath::unilateral_funding_value_spread01)
            .max(0.0)
    }

    /// Path bilateral funding value spread-01, floored at zero after the
    /// sum.
    pub fn bilateral_funding_value_spread01(&self) -> f64 {
        self.aggregate_scalar(CreditDebtGroupPath::bilateral_funding_value_spread01)
            .max(0.0)
    }

    /// Period symmetric funding value spread-01 series, never floored.
    pub fn period_symmetric_funding_value_spread01(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.period_count(), false, |group| {
            group.funding_spread().symmetric_value_spread01()
        })
    }

    /// Period unilateral funding value spread-01 series, floored per period
    /// after summation.
    pub fn period_unilateral_funding_value_spread01(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.period_count(), true, |group| {
            group.funding_spread().unilateral_value_spread01()
        })
    }

    /// Period bilateral funding value spread-01 series, floored per period
    /// after summation.
    pub fn period_bilateral_funding_value_spread01(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.period_count(), true, |group| {
            group.funding_spread().bilateral_value_spread01()
        })
    }

    // ------------------------------------------------------------------
    // Funding value adjustment
    // ------------------------------------------------------------------

    /// Period symmetric funding value adjustment series.
    pub fn period_symmetric_funding_value_adjustment(&self) -> Vec<f64> {
        self.period_adjustment(&self.period_symmetric_funding_value_spread01())
    }

    /// Period unilateral funding value adjustment series.
    pub fn period_unilateral_funding_value_adjustment(&self) -> Vec<f64> {
        self.period_adjustment(&self.period_unilateral_funding_value_spread01())
    }

    /// Period bilateral funding value adjustment series.
    pub fn period_bilateral_funding_value_adjustment(&self) -> Vec<f64> {
        self.period_adjustment(&self.period_bilateral_funding_value_spread01())
    }

    /// Path symmetric funding value adjustment: the added period sum.
    pub fn symmetric_funding_value_adjustment(&self) -> f64 {
        self.period_symmetric_funding_value_adjustment().iter().sum()
    }

    /// Path unilateral funding value adjustment: the subtracted period sum,
    /// presented as a cost.
    pub fn unilateral_funding_value_adjustment(&self) -> f64 {
        -self
            .period_unilateral_funding_value_adjustment()
            .iter()
            .sum::<f64>()
    }

    /// Path bilateral funding value adjustment: the subtracted period sum,
    /// presented as a cost.
    pub fn bilateral_funding_value_adjustment(&self) -> f64 {
        -self
            .period_bilateral_funding_value_adjustment()
            .iter()
            .sum::<f64>()
    }

    // ------------------------------------------------------------------
    // Funding debt adjustment
    // ------------------------------------------------------------------

    /// Period unilateral funding debt adjustment series: plain sums, no
    /// flooring.
    pub fn period_unilateral_funding_debt_adjustment(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.period_count(), false, |group| {
            group.funding_spread().unilateral_debt_adjustment()
        })
    }

    /// Period bilateral funding debt adjustment series: plain sums, no
    /// flooring.
    pub fn period_bilateral_funding_debt_adjustment(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.period_count(), false, |group| {
            group.funding_spread().bilateral_debt_adjustment()
        })
    }

    /// Path unilateral funding debt adjustment: the period sum.
    pub fn unilateral_funding_debt_adjustment(&self) -> f64 {
        self.period_unilateral_funding_debt_adjustment().iter().sum()
    }

    /// Path bilateral funding debt adjustment: the period sum.
    pub fn bilateral_funding_debt_adjustment(&self) -> f64 {
        self.period_bilateral_funding_debt_adjustment().iter().sum()
    }

    // ------------------------------------------------------------------
    // Vertex exposure
    // ------------------------------------------------------------------

    /// Vertex collateralised exposure series.
    pub fn vertex_collateralised_exposure(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.collateralised().total()
        })
    }

    /// Present-valued vertex collateralised exposure series.
    pub fn vertex_collateralised_exposure_pv(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.collateralised().total_pv()
        })
    }

    /// Vertex collateralised positive exposure series.
    pub fn vertex_collateralised_positive_exposure(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.collateralised().positive()
        })
    }

    /// Present-valued vertex collateralised positive exposure series.
    pub fn vertex_collateralised_positive_exposure_pv(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.collateralised().positive_pv()
        })
    }

    /// Vertex collateralised negative exposure series.
    pub fn vertex_collateralised_negative_exposure(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.collateralised().negative()
        })
    }

    /// Present-valued vertex collateralised negative exposure series.
    pub fn vertex_collateralised_negative_exposure_pv(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.collateralised().negative_pv()
        })
    }

    /// Vertex uncollateralised exposure series.
    pub fn vertex_uncollateralised_exposure(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.uncollateralised().total()
        })
    }

    /// Present-valued vertex uncollateralised exposure series.
    pub fn vertex_uncollateralised_exposure_pv(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.uncollateralised().total_pv()
        })
    }

    /// Vertex uncollateralised positive exposure series.
    pub fn vertex_uncollateralised_positive_exposure(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.uncollateralised().positive()
        })
    }

    /// Present-valued vertex uncollateralised positive exposure series.
    pub fn vertex_uncollateralised_positive_exposure_pv(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.uncollateralised().positive_pv()
        })
    }

    /// Vertex uncollateralised negative exposure series.
    pub fn vertex_uncollateralised_negative_exposure(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.uncollateralised().negative()
        })
    }

    /// Present-valued vertex uncollateralised negative exposure series.
    pub fn vertex_uncollateralised_negative_exposure_pv(&self) -> Vec<f64> {
        self.aggregate_series(self.market_path.vertex_count(), false, |group| {
            group.uncollateralised().negative_pv()
        })
    }

    /// Vertex funding exposure series, floored at zero per vertex after
    /// aggregation.
    pub fn vertex_funding_exposure(&self) -> Vec<f64> {
        self.aggregate_series(
            self.market_path.vertex_count(),
            true,
            CreditDebtGroupPath::vertex_funding_exposure,
        )
    }

    /// Present-valued vertex funding exposure series, floored at zero per
    /// vertex after aggregation.
    pub fn vertex_funding_exposure_pv(&self) -> Vec<f64> {
        self.aggregate_series(
            self.market_path.vertex_count(),
            true,
            CreditDebtGroupPath::vertex_funding_exposure_pv,
        )
    }

    // ------------------------------------------------------------------
    // Credit / debt / collateral scalar roll-ups
    // ------------------------------------------------------------------

    /// Path unilateral credit adjustment: plain sum over groups.
    pub fn unilateral_credit_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().unilateral_credit())
    }

    /// Path bilateral credit adjustment: plain sum over groups.
    pub fn bilateral_credit_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().bilateral_credit())
    }

    /// Path contra-liability credit adjustment: plain sum over groups.
    pub fn contra_liability_credit_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().contra_liability_credit())
    }

    /// Path unilateral debt adjustment: plain sum over groups.
    pub fn unilateral_debt_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().unilateral_debt())
    }

    /// Path bilateral debt adjustment: plain sum over groups.
    pub fn bilateral_debt_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().bilateral_debt())
    }

    /// Path contra-asset debt adjustment: plain sum over groups.
    pub fn contra_asset_debt_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().contra_asset_debt())
    }

    /// Path unilateral collateral adjustment: plain sum over groups.
    pub fn unilateral_collateral_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().unilateral_collateral())
    }

    /// Path bilateral collateral adjustment: plain sum over groups.
    pub fn bilateral_collateral_adjustment(&self) -> f64 {
        self.aggregate_scalar(|group| group.adjustments().bilateral_collateral())
    }
}
