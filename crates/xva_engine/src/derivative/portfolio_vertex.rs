//! Replicating portfolio holdings at a time node.

use super::error::DerivativeError;

/// Replicating holdings at one trajectory vertex.
///
/// The replication strategy funds the derivative through four instruments
/// plus a cash account: the position itself, the dealer's senior and
/// (optional stack) subordinate funding numeraires, and the client funding
/// numeraire. Holdings are signed; the cash account carries the cumulative
/// balance accrued by rebalancing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplicationPortfolioVertex {
    position_holdings: f64,
    dealer_senior_numeraire_holdings: f64,
    dealer_subordinate_numeraire_holdings: f64,
    client_numeraire_holdings: f64,
    cash_account_balance: f64,
}

impl ReplicationPortfolioVertex {
    /// Creates a replication portfolio vertex.
    ///
    /// # Errors
    ///
    /// Returns `DerivativeError::NonFinite` if any holding is NaN or
    /// infinite.
    pub fn new(
        position_holdings: f64,
        dealer_senior_numeraire_holdings: f64,
        dealer_subordinate_numeraire_holdings: f64,
        client_numeraire_holdings: f64,
        cash_account_balance: f64,
    ) -> Result<Self, DerivativeError> {
        if !position_holdings.is_finite() {
            return Err(DerivativeError::NonFinite("position_holdings"));
        }
        if !dealer_senior_numeraire_holdings.is_finite() {
            return Err(DerivativeError::NonFinite("dealer_senior_numeraire_holdings"));
        }
        if !dealer_subordinate_numeraire_holdings.is_finite() {
            return Err(DerivativeError::NonFinite(
                "dealer_subordinate_numeraire_holdings",
            ));
        }
        if !client_numeraire_holdings.is_finite() {
            return Err(DerivativeError::NonFinite("client_numeraire_holdings"));
        }
        if !cash_account_balance.is_finite() {
            return Err(DerivativeError::NonFinite("cash_account_balance"));
        }

        Ok(Self {
            position_holdings,
            dealer_senior_numeraire_holdings,
            dealer_subordinate_numeraire_holdings,
            client_numeraire_holdings,
            cash_account_balance,
        })
    }

    /// Returns the position holdings.
    #[inline]
    pub fn position_holdings(&self) -> f64 {
        self.position_holdings
    }

    /// Returns the dealer senior numeraire holdings.
    #[inline]
    pub fn dealer_senior_numeraire_holdings(&self) -> f64 {
        self.dealer_senior_numeraire_holdings
    }

    /// Returns the dealer subordinate numeraire holdings.
    #[inline]
    pub fn dealer_subordinate_numeraire_holdings(&self) -> f64 {
        self.dealer_subordinate_numeraire_holdings
    }

    /// Returns the client numeraire holdings.
    #[inline]
    pub fn client_numeraire_holdings(&self) -> f64 {
        self.client_numeraire_holdings
    }

    /// Returns the cumulative cash-account balance.
    #[inline]
    pub fn cash_account_balance(&self) -> f64 {
        self.cash_account_balance
    }
}
