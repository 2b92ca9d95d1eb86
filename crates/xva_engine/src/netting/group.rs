//! Per-netting-group exposure and spread series along one path.

use super::error::NettingError;

/// One exposure decomposition along a path: net, positive-only and
/// negative-only series, each spot and present-valued. All six series carry
/// one value per market vertex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureSeries {
    total: Vec<f64>,
    positive: Vec<f64>,
    negative: Vec<f64>,
    total_pv: Vec<f64>,
    positive_pv: Vec<f64>,
    negative_pv: Vec<f64>,
}

impl ExposureSeries {
    /// Creates an exposure decomposition from its six vertex series.
    ///
    /// # Errors
    ///
    /// Returns `NettingError::EmptySeries` when the net series is empty, or
    /// `NettingError::SeriesLengthMismatch` unless all six lengths agree.
    pub fn new(
        total: Vec<f64>,
        positive: Vec<f64>,
        negative: Vec<f64>,
        total_pv: Vec<f64>,
        positive_pv: Vec<f64>,
        negative_pv: Vec<f64>,
    ) -> Result<Self, NettingError> {
        let vertex_count = total.len();

        if vertex_count == 0 {
            return Err(NettingError::EmptySeries("exposure"));
        }

        for (series, name) in [
            (&positive, "positive exposure"),
            (&negative, "negative exposure"),
            (&total_pv, "exposure PV"),
            (&positive_pv, "positive exposure PV"),
            (&negative_pv, "negative exposure PV"),
        ] {
            if series.len() != vertex_count {
                return Err(NettingError::SeriesLengthMismatch {
                    series: name,
                    expected: vertex_count,
                    found: series.len(),
                });
            }
        }

        Ok(Self {
            total,
            positive,
            negative,
            total_pv,
            positive_pv,
            negative_pv,
        })
    }

    /// Returns the number of vertices covered.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.total.len()
    }

    /// Returns the net exposure series.
    #[inline]
    pub fn total(&self) -> &[f64] {
        &self.total
    }

    /// Returns the positive-only exposure series.
    #[inline]
    pub fn positive(&self) -> &[f64] {
        &self.positive
    }

    /// Returns the negative-only exposure series.
    #[inline]
    pub fn negative(&self) -> &[f64] {
        &self.negative
    }

    /// Returns the present-valued net exposure series.
    #[inline]
    pub fn total_pv(&self) -> &[f64] {
        &self.total_pv
    }

    /// Returns the present-valued positive-only exposure series.
    #[inline]
    pub fn positive_pv(&self) -> &[f64] {
        &self.positive_pv
    }

    /// Returns the present-valued negative-only exposure series.
    #[inline]
    pub fn negative_pv(&self) -> &[f64] {
        &self.negative_pv
    }
}

/// Per-period funding spread-01 and funding debt adjustment series of one
/// netting group, one value per period (adjacent vertex pair).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FundingSpreadSeries {
    symmetric_value_spread01: Vec<f64>,
    unilateral_value_spread01: Vec<f64>,
    bilateral_value_spread01: Vec<f64>,
    unilateral_debt_adjustment: Vec<f64>,
    bilateral_debt_adjustment: Vec<f64>,
}

impl FundingSpreadSeries {
    /// Creates the funding spread series bundle.
    ///
    /// # Errors
    ///
    /// Returns `NettingError::SeriesLengthMismatch` unless all five period
    /// series share one length.
    pub fn new(
        symmetric_value_spread01: Vec<f64>,
        unilateral_value_spread01: Vec<f64>,
        bilateral_value_spread01: Vec<f64>,
        unilateral_debt_adjustment: Vec<f64>,
        bilateral_debt_adjustment: Vec<f64>,
    ) -> Result<Self, NettingError> {
        let period_count = symmetric_value_spread01.len();

        for (series, name) in [
            (&unilateral_value_spread01, "unilateral value spread-01"),
            (&bilateral_value_spread01, "bilateral value spread-01"),
            (&unilateral_debt_adjustment, "unilateral debt adjustment"),
            (&bilateral_debt_adjustment, "bilateral debt adjustment"),
        ] {
            if series.len() != period_count {
                return Err(NettingError::SeriesLengthMismatch {
                    series: name,
                    expected: period_count,
                    found: series.len(),
                });
            }
        }

        Ok(Self {
            symmetric_value_spread01,
            unilateral_value_spread01,
            bilateral_value_spread01,
            unilateral_debt_adjustment,
            bilateral_debt_adjustment,
        })
    }

    /// Returns the number of periods covered.
    #[inline]
    pub fn period_count(&self) -> usize {
        self.symmetric_value_spread01.len()
    }

    /// Returns the symmetric funding value spread-01 series.
    #[inline]
    pub fn symmetric_value_spread01(&self) -> &[f64] {
        &self.symmetric_value_spread01
    }

    /// Returns the unilateral funding value spread-01 series.
    #[inline]
    pub fn unilateral_value_spread01(&self) -> &[f64] {
        &self.unilateral_value_spread01
    }

    /// Returns the bilateral funding value spread-01 series.
    #[inline]
    pub fn bilateral_value_spread01(&self) -> &[f64] {
        &self.bilateral_value_spread01
    }

    /// Returns the unilateral funding debt adjustment series.
    #[inline]
    pub fn unilateral_debt_adjustment(&self) -> &[f64] {
        &self.unilateral_debt_adjustment
    }

    /// Returns the bilateral funding debt adjustment series.
    #[inline]
    pub fn bilateral_debt_adjustment(&self) -> &[f64] {
        &self.bilateral_debt_adjustment
    }
}

/// Scalar credit/debt/collateral adjustment roll-ups of one netting group
/// along one path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupAdjustments {
    unilateral_credit: f64,
    bilateral_credit: f64,
    contra_liability_credit: f64,
    unilateral_debt: f64,
    bilateral_debt: f64,
    contra_asset_debt: f64,
    unilateral_collateral: f64,
    bilateral_collateral: f64,
}

impl GroupAdjustments {
    /// Creates the scalar adjustment roll-ups.
    ///
    /// # Errors
    ///
    /// Returns `NettingError::NonFinite` if any roll-up is NaN or infinite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        unilateral_credit: f64,
        bilateral_credit: f64,
        contra_liability_credit: f64,
        unilateral_debt: f64,
        bilateral_debt: f64,
        contra_asset_debt: f64,
        unilateral_collateral: f64,
        bilateral_collateral: f64,
    ) -> Result<Self, NettingError> {
        for (value, name) in [
            (unilateral_credit, "unilateral_credit"),
            (bilateral_credit, "bilateral_credit"),
            (contra_liability_credit, "contra_liability_credit"),
            (unilateral_debt, "unilateral_debt"),
            (bilateral_debt, "bilateral_debt"),
            (contra_asset_debt, "contra_asset_debt"),
            (unilateral_collateral, "unilateral_collateral"),
            (bilateral_collateral, "bilateral_collateral"),
        ] {
            if !value.is_finite() {
                return Err(NettingError::NonFinite(name));
            }
        }

        Ok(Self {
            unilateral_credit,
            bilateral_credit,
            contra_liability_credit,
            unilateral_debt,
            bilateral_debt,
            contra_asset_debt,
            unilateral_collateral,
            bilateral_collateral,
        })
    }

    /// Returns the unilateral credit adjustment.
    #[inline]
    pub fn unilateral_credit(&self) -> f64 {
        self.unilateral_credit
    }

    /// Returns the bilateral credit adjustment.
    #[inline]
    pub fn bilateral_credit(&self) -> f64 {
        self.bilateral_credit
    }

    /// Returns the contra-liability credit adjustment.
    #[inline]
    pub fn contra_liability_credit(&self) -> f64 {
        self.contra_liability_credit
    }

    /// Returns the unilateral debt adjustment.
    #[inline]
    pub fn unilateral_debt(&self) -> f64 {
        self.unilateral_debt
    }

    /// Returns the bilateral debt adjustment.
    #[inline]
    pub fn bilateral_debt(&self) -> f64 {
        self.bilateral_debt
    }

    /// Returns the contra-asset debt adjustment.
    #[inline]
    pub fn contra_asset_debt(&self) -> f64 {
        self.contra_asset_debt
    }

    /// Returns the unilateral collateral adjustment.
    #[inline]
    pub fn unilateral_collateral(&self) -> f64 {
        self.unilateral_collateral
    }

    /// Returns the bilateral collateral adjustment.
    #[inline]
    pub fn bilateral_collateral(&self) -> f64 {
        self.bilateral_collateral
    }
}

/// Pre-aggregated exposure and spread series of one credit/debt netting
/// group along one path.
///
/// Supplied by the collateral/exposure layer upstream; all vertex series
/// carry one value per market vertex (length N) and all period series one
/// value per adjacent pair (length N−1). Length consistency is validated
/// once at construction and assumed thereafter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditDebtGroupPath {
    collateralised: ExposureSeries,
    uncollateralised: ExposureSeries,
    funding_exposure: Vec<f64>,
    funding_exposure_pv: Vec<f64>,
    funding_spread: FundingSpreadSeries,
    adjustments: GroupAdjustments,
}

impl CreditDebtGroupPath {
    /// Assembles a credit/debt group path from its series bundles.
    ///
    /// # Errors
    ///
    /// Returns `NettingError::SeriesLengthMismatch` unless the
    /// uncollateralised decomposition and the funding exposure series match
    /// the collateralised vertex count N, and the funding spread series
    /// carry exactly N−1 periods.
    pub fn new(
        collateralised: ExposureSeries,
        uncollateralised: ExposureSeries,
        funding_exposure: Vec<f64>,
        funding_exposure_pv: Vec<f64>,
        funding_spread: FundingSpreadSeries,
        adjustments: GroupAdjustments,
    ) -> Result<Self, NettingError> {
        let vertex_count = collateralised.vertex_count();

        if uncollateralised.vertex_count() != vertex_count {
            return Err(NettingError::SeriesLengthMismatch {
                series: "uncollateralised exposure",
                expected: vertex_count,
                found: uncollateralised.vertex_count(),
            });
        }
        if funding_exposure.len() != vertex_count {
            return Err(NettingError::SeriesLengthMismatch {
                series: "funding exposure",
                expected: vertex_count,
                found: funding_exposure.len(),
            });
        }
        if funding_exposure_pv.len() != vertex_count {
            return Err(NettingError::SeriesLengthMismatch {
                series: "funding exposure PV",
                expected: vertex_count,
                found: funding_exposure_pv.len(),
            });
        }
        if funding_spread.period_count() != vertex_count - 1 {
            return Err(NettingError::SeriesLengthMismatch {
                series: "funding spread periods",
                expected: vertex_count - 1,
                found: funding_spread.period_count(),
            });
        }

        Ok(Self {
            collateralised,
            uncollateralised,
            funding_exposure,
            funding_exposure_pv,
            funding_spread,
            adjustments,
        })
    }

    /// Returns the number of vertices N.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.collateralised.vertex_count()
    }

    /// Returns the number of periods N−1.
    #[inline]
    pub fn period_count(&self) -> usize {
        self.funding_spread.period_count()
    }

    /// Returns the collateralised exposure decomposition.
    #[inline]
    pub fn collateralised(&self) -> &ExposureSeries {
        &self.collateralised
    }

    /// Returns the uncollateralised exposure decomposition.
    #[inline]
    pub fn uncollateralised(&self) -> &ExposureSeries {
        &self.uncollateralised
    }

    /// Returns the vertex funding exposure series.
    #[inline]
    pub fn vertex_funding_exposure(&self) -> &[f64] {
        &self.funding_exposure
    }

    /// Returns the present-valued vertex funding exposure series.
    #[inline]
    pub fn vertex_funding_exposure_pv(&self) -> &[f64] {
        &self.funding_exposure_pv
    }

    /// Returns the funding spread series bundle.
    #[inline]
    pub fn funding_spread(&self) -> &FundingSpreadSeries {
        &self.funding_spread
    }

    /// Returns the scalar adjustment roll-ups.
    #[inline]
    pub fn adjustments(&self) -> &GroupAdjustments {
        &self.adjustments
    }

    /// Returns the group's path symmetric funding value spread-01: the sum
    /// of its period series.
    pub fn symmetric_funding_value_spread01(&self) -> f64 {
        self.funding_spread.symmetric_value_spread01().iter().sum()
    }

    /// Returns the group's path unilateral funding value spread-01.
    pub fn unilateral_funding_value_spread01(&self) -> f64 {
        self.funding_spread.unilateral_value_spread01().iter().sum()
    }

    /// Returns the group's path bilateral funding value spread-01.
    pub fn bilateral_funding_value_spread01(&self) -> f64 {
        self.funding_spread.bilateral_value_spread01().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn exposure(n: usize) -> ExposureSeries {
        ExposureSeries::new(
            vec![1.0; n],
            vec![1.0; n],
            vec![0.0; n],
            vec![0.9; n],
            vec![0.9; n],
            vec![0.0; n],
        )
        .unwrap()
    }

    fn spreads(periods: usize) -> FundingSpreadSeries {
        FundingSpreadSeries::new(
            vec![100.0; periods],
            vec![60.0; periods],
            vec![40.0; periods],
            vec![2.0; periods],
            vec![1.0; periods],
        )
        .unwrap()
    }

    fn adjustments() -> GroupAdjustments {
        GroupAdjustments::new(1.0, 0.8, 0.2, -0.5, -0.4, -0.1, 0.3, 0.25).unwrap()
    }

    #[test]
    fn test_exposure_series_rejects_mismatched_lengths() {
        let result = ExposureSeries::new(
            vec![1.0, 2.0],
            vec![1.0],
            vec![0.0, 0.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_exposure_series_rejects_empty() {
        assert_eq!(
            ExposureSeries::new(
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new()
            ),
            Err(NettingError::EmptySeries("exposure"))
        );
    }

    #[test]
    fn test_spread_series_rejects_mismatched_lengths() {
        let result = FundingSpreadSeries::new(
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_group_adjustments_reject_non_finite() {
        assert!(
            GroupAdjustments::new(f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).is_err()
        );
    }

    #[test]
    fn test_group_path_lengths() {
        let group = CreditDebtGroupPath::new(
            exposure(3),
            exposure(3),
            vec![1.0; 3],
            vec![0.9; 3],
            spreads(2),
            adjustments(),
        )
        .unwrap();

        assert_eq!(group.vertex_count(), 3);
        assert_eq!(group.period_count(), 2);
    }

    #[test]
    fn test_group_path_rejects_period_count_mismatch() {
        let result = CreditDebtGroupPath::new(
            exposure(3),
            exposure(3),
            vec![1.0; 3],
            vec![0.9; 3],
            spreads(3),
            adjustments(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_group_scalar_spread01_sums_periods() {
        let group = CreditDebtGroupPath::new(
            exposure(3),
            exposure(3),
            vec![1.0; 3],
            vec![0.9; 3],
            spreads(2),
            adjustments(),
        )
        .unwrap();

        assert_relative_eq!(group.symmetric_funding_value_spread01(), 200.0);
        assert_relative_eq!(group.unilateral_funding_value_spread01(), 120.0);
        assert_relative_eq!(group.bilateral_funding_value_spread01(), 80.0);
    }
}
