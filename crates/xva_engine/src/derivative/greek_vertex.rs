//! Derivative XVA value and its position-value sensitivities.

use super::error::DerivativeError;

/// Derivative XVA value and Greeks at one trajectory vertex.
///
/// Delta and gamma are sensitivities to the position manifest value,
/// estimated by central differences of the PDE source term over the step.
/// The fair value is a drift-decayed reference carried alongside the XVA
/// value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionGreekVertex {
    derivative_xva_value: f64,
    derivative_xva_value_delta: f64,
    derivative_xva_value_gamma: f64,
    derivative_fair_value: f64,
}

impl PositionGreekVertex {
    /// Creates a position Greek vertex.
    ///
    /// # Errors
    ///
    /// Returns `DerivativeError::NonFinite` if any field is NaN or infinite.
    pub fn new(
        derivative_xva_value: f64,
        derivative_xva_value_delta: f64,
        derivative_xva_value_gamma: f64,
        derivative_fair_value: f64,
    ) -> Result<Self, DerivativeError> {
        if !derivative_xva_value.is_finite() {
            return Err(DerivativeError::NonFinite("derivative_xva_value"));
        }
        if !derivative_xva_value_delta.is_finite() {
            return Err(DerivativeError::NonFinite("derivative_xva_value_delta"));
        }
        if !derivative_xva_value_gamma.is_finite() {
            return Err(DerivativeError::NonFinite("derivative_xva_value_gamma"));
        }
        if !derivative_fair_value.is_finite() {
            return Err(DerivativeError::NonFinite("derivative_fair_value"));
        }

        Ok(Self {
            derivative_xva_value,
            derivative_xva_value_delta,
            derivative_xva_value_gamma,
            derivative_fair_value,
        })
    }

    /// Returns the derivative XVA value.
    #[inline]
    pub fn derivative_xva_value(&self) -> f64 {
        self.derivative_xva_value
    }

    /// Returns the derivative XVA value delta.
    #[inline]
    pub fn derivative_xva_value_delta(&self) -> f64 {
        self.derivative_xva_value_delta
    }

    /// Returns the derivative XVA value gamma.
    #[inline]
    pub fn derivative_xva_value_gamma(&self) -> f64 {
        self.derivative_xva_value_gamma
    }

    /// Returns the drift-decayed derivative fair value reference.
    #[inline]
    pub fn derivative_fair_value(&self) -> f64 {
        self.derivative_fair_value
    }
}
