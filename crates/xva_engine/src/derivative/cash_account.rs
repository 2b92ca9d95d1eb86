//! Cash flows accrued over one Euler step.

use super::error::DerivativeError;

/// Cash generated (or consumed) by each replication leg over one time step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashAccountEdge {
    position_cash_change: f64,
    dealer_cash_accumulation: f64,
    client_cash_accumulation: f64,
}

impl CashAccountEdge {
    /// Creates a cash account edge from the three leg accruals.
    ///
    /// # Errors
    ///
    /// Returns `DerivativeError::NonFinite` if any accrual is NaN or
    /// infinite.
    pub fn new(
        position_cash_change: f64,
        dealer_cash_accumulation: f64,
        client_cash_accumulation: f64,
    ) -> Result<Self, DerivativeError> {
        if !position_cash_change.is_finite() {
            return Err(DerivativeError::NonFinite("position_cash_change"));
        }
        if !dealer_cash_accumulation.is_finite() {
            return Err(DerivativeError::NonFinite("dealer_cash_accumulation"));
        }
        if !client_cash_accumulation.is_finite() {
            return Err(DerivativeError::NonFinite("client_cash_accumulation"));
        }

        Ok(Self {
            position_cash_change,
            dealer_cash_accumulation,
            client_cash_accumulation,
        })
    }

    /// Returns the cash change from financing the hedge position.
    #[inline]
    pub fn position_cash_change(&self) -> f64 {
        self.position_cash_change
    }

    /// Returns the dealer-side cash accumulation.
    #[inline]
    pub fn dealer_cash_accumulation(&self) -> f64 {
        self.dealer_cash_accumulation
    }

    /// Returns the client-side cash accumulation.
    #[inline]
    pub fn client_cash_accumulation(&self) -> f64 {
        self.client_cash_accumulation
    }

    /// Returns the total cash accumulated over the step.
    #[inline]
    pub fn accumulation(&self) -> f64 {
        self.position_cash_change + self.dealer_cash_accumulation + self.client_cash_accumulation
    }
}

/// Outcome of re-balancing the cash account over one step: the cash-account
/// edge plus the derivative value change implied by self-financing
/// replication.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashAccountRebalancer {
    cash_account_edge: CashAccountEdge,
    derivative_xva_value_change: f64,
}

impl CashAccountRebalancer {
    /// Creates a rebalancer outcome.
    ///
    /// # Errors
    ///
    /// Returns `DerivativeError::NonFinite` if the value change is NaN or
    /// infinite.
    pub fn new(
        cash_account_edge: CashAccountEdge,
        derivative_xva_value_change: f64,
    ) -> Result<Self, DerivativeError> {
        if !derivative_xva_value_change.is_finite() {
            return Err(DerivativeError::NonFinite("derivative_xva_value_change"));
        }

        Ok(Self {
            cash_account_edge,
            derivative_xva_value_change,
        })
    }

    /// Returns the cash-account edge.
    #[inline]
    pub fn cash_account_edge(&self) -> CashAccountEdge {
        self.cash_account_edge
    }

    /// Returns the derivative value change implied by self-financing
    /// replication over the step.
    #[inline]
    pub fn derivative_xva_value_change(&self) -> f64 {
        self.derivative_xva_value_change
    }
}
