//! Form state for one calculator session.
//!
//! A session owns both field sets and the last computed result. Edits never
//! recompute the result; it only changes when [`ZakatSession::calculate`]
//! is called, so a displayed amount can be stale until the next calculation.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    AssetField, Assets, Category, FieldKey, InvestmentField, Investments, RawValue,
    WealthAggregator, WealthSummary,
};

/// Errors raised when the form addresses a field that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown category '{0}' (expected 'assets' or 'investments')")]
    UnknownCategory(String),

    #[error("unknown {category} field '{key}'")]
    UnknownField { category: Category, key: String },
}

/// Everything the form holds between keystrokes.
#[derive(Debug, Clone, Default)]
pub struct ZakatSession {
    assets: Assets,
    investments: Investments,
    aggregator: WealthAggregator,

    /// Populated by `calculate`, never cleared.
    last_summary: Option<WealthSummary>,
}

impl ZakatSession {
    /// Creates a session with every field empty and no result.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn investments(&self) -> &Investments {
        &self.investments
    }

    pub fn set_asset(
        &mut self,
        key: AssetField,
        value: impl Into<RawValue>,
    ) {
        self.assets = self.assets.with_value(key, value);
    }

    pub fn set_investment(
        &mut self,
        key: InvestmentField,
        value: impl Into<RawValue>,
    ) {
        self.investments = self.investments.with_value(key, value);
    }

    /// Applies one edit addressed by form identifiers, e.g.
    /// `("investments", "mutualFunds", "300")`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the category or key is unknown. The
    /// session is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use zakat_core::{InvestmentField, SessionError, ZakatSession};
    ///
    /// let mut session = ZakatSession::new();
    /// session.update("investments", "mutualFunds", "300").unwrap();
    ///
    /// assert_eq!(session.investments().get(InvestmentField::MutualFunds).as_str(), "300");
    /// assert!(matches!(
    ///     session.update("assets", "bonds", "1"),
    ///     Err(SessionError::UnknownField { .. })
    /// ));
    /// ```
    pub fn update(
        &mut self,
        category: &str,
        key: &str,
        value: impl Into<RawValue>,
    ) -> Result<(), SessionError> {
        let category = Category::parse(category)
            .ok_or_else(|| SessionError::UnknownCategory(category.to_string()))?;
        let unknown = || SessionError::UnknownField {
            category,
            key: key.to_string(),
        };

        match category {
            Category::Assets => {
                let field = AssetField::parse(key).ok_or_else(unknown)?;
                self.set_asset(field, value);
            }
            Category::Investments => {
                let field = InvestmentField::parse(key).ok_or_else(unknown)?;
                self.set_investment(field, value);
            }
        }
        Ok(())
    }

    /// Computes zakat on the current fields and remembers the result.
    pub fn calculate(&mut self) -> Decimal {
        let summary = self.aggregator.summarize(&self.assets, &self.investments);
        debug!(payable = %summary.payable, "stored calculation result");
        let payable = summary.payable;
        self.last_summary = Some(summary);
        payable
    }

    /// Payable amount from the last [`calculate`](Self::calculate), if any.
    pub fn result(&self) -> Option<Decimal> {
        self.last_summary.as_ref().map(|summary| summary.payable)
    }

    /// Totals from the last [`calculate`](Self::calculate), if any.
    pub fn summary(&self) -> Option<&WealthSummary> {
        self.last_summary.as_ref()
    }

    /// Check if a result has been computed.
    pub fn has_result(&self) -> bool {
        self.last_summary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_session_has_no_result() {
        let session = ZakatSession::new();

        assert_eq!(session.result(), None);
        assert!(!session.has_result());
        assert_eq!(session.summary(), None);
    }

    #[test]
    fn calculate_stores_result() {
        let mut session = ZakatSession::new();
        session.update("assets", "cash", "1000").unwrap();
        session.update("assets", "gold", "500").unwrap();
        session.update("investments", "stocks", "2000").unwrap();
        session.update("investments", "realEstate", "1500").unwrap();

        let payable = session.calculate();

        assert_eq!(payable, dec!(125.00));
        assert_eq!(session.result(), Some(dec!(125.00)));
        assert_eq!(session.summary().map(|s| s.total_wealth), Some(dec!(5000)));
    }

    #[test]
    fn result_is_stale_after_edits() {
        let mut session = ZakatSession::new();
        session.set_asset(AssetField::Cash, "1000");
        session.calculate();

        session.set_asset(AssetField::Cash, "2000");

        assert_eq!(session.result(), Some(dec!(25.00)));
    }

    #[test]
    fn recalculating_picks_up_edits() {
        let mut session = ZakatSession::new();
        session.set_asset(AssetField::Cash, "1000");
        session.calculate();
        session.set_investment(InvestmentField::Other, "1000");

        let payable = session.calculate();

        assert_eq!(payable, dec!(50.00));
        assert_eq!(session.result(), Some(dec!(50.00)));
    }

    #[test]
    fn other_key_is_resolved_per_category() {
        let mut session = ZakatSession::new();

        session.update("assets", "other", "1").unwrap();
        session.update("investments", "other", "2").unwrap();

        assert_eq!(session.assets().get(AssetField::Other).as_str(), "1");
        assert_eq!(
            session.investments().get(InvestmentField::Other).as_str(),
            "2"
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut session = ZakatSession::new();

        let result = session.update("liabilities", "cash", "1");

        assert_eq!(
            result,
            Err(SessionError::UnknownCategory("liabilities".to_string()))
        );
    }

    #[test]
    fn unknown_key_is_rejected_without_changing_state() {
        let mut session = ZakatSession::new();
        session.update("assets", "cash", "10").unwrap();

        let result = session.update("assets", "stocks", "99");

        assert_eq!(
            result,
            Err(SessionError::UnknownField {
                category: Category::Assets,
                key: "stocks".to_string(),
            })
        );
        let expected: Assets = [(AssetField::Cash, "10")].into_iter().collect();
        assert_eq!(session.assets(), &expected);
        assert_eq!(session.investments(), &Investments::new());
    }

    #[test]
    fn invalid_values_are_stored_verbatim() {
        let mut session = ZakatSession::new();

        session.update("assets", "silver", "lots").unwrap();

        assert_eq!(session.assets().get(AssetField::Silver).as_str(), "lots");
        assert_eq!(session.calculate(), Decimal::ZERO);
    }
}
