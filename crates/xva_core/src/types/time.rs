//! Actual/365.25 day-count helpers.
//!
//! Market vertices are anchored on a day grid; the evolution engine works in
//! year fractions. The conversion between the two uses the Actual/365.25
//! convention throughout the workspace.

/// Days per year under the Actual/365.25 convention.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Converts a raw day count into an Actual/365.25 year fraction.
///
/// # Examples
///
/// ```
/// use xva_core::types::time::year_fraction;
///
/// assert_eq!(year_fraction(365.25), 1.0);
/// ```
#[inline]
pub fn year_fraction(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_year() {
        assert_eq!(year_fraction(365.25), 1.0);
    }

    #[test]
    fn test_quarter() {
        assert_relative_eq!(year_fraction(91.3125), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_days() {
        assert_eq!(year_fraction(0.0), 0.0);
    }
}
