//! Zakat on total wealth.
//!
//! The payable amount is the sum of every asset and investment field,
//! multiplied by the zakat rate:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total assets: cash + gold + silver + other |
//! | 2    | Total investments: stocks + mutual funds + real estate + other |
//! | 3    | Total wealth: Step 1 + Step 2 |
//! | 4    | Zakat payable: Step 3 × 2.5% |
//!
//! Fields are coerced with [`coerce_amount`](super::common::coerce_amount),
//! so blank or unreadable entries add nothing instead of failing the
//! calculation. Results are not rounded; rounding to cents is left to
//! display code.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use zakat_core::{AssetField, Assets, InvestmentField, Investments, WealthAggregator};
//!
//! let assets: Assets = [(AssetField::Cash, "1000"), (AssetField::Gold, "500")]
//!     .into_iter()
//!     .collect();
//! let investments: Investments = [(InvestmentField::Stocks, "2000"), (InvestmentField::RealEstate, "1500")]
//!     .into_iter()
//!     .collect();
//!
//! let summary = WealthAggregator::default().summarize(&assets, &investments);
//!
//! assert_eq!(summary.total_wealth, dec!(5000));
//! assert_eq!(summary.payable, dec!(125.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Assets, Investments};

/// Share of total wealth due as zakat (2.5%).
pub const ZAKAT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Totals behind a payable amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthSummary {
    /// Sum of the asset fields (Step 1).
    pub total_assets: Decimal,

    /// Sum of the investment fields (Step 2).
    pub total_investments: Decimal,

    /// Assets plus investments (Step 3).
    pub total_wealth: Decimal,

    /// Rate applied to the total wealth.
    pub rate: Decimal,

    /// Zakat payable (Step 4), unrounded.
    pub payable: Decimal,
}

/// Calculator that turns the two field sets into a payable amount.
///
/// The rate is a parameter so callers and tests can vary it; the form
/// always uses [`ZAKAT_RATE`], which is what [`Default`] gives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WealthAggregator {
    rate: Decimal,
}

impl Default for WealthAggregator {
    fn default() -> Self {
        Self::new(ZAKAT_RATE)
    }
}

impl WealthAggregator {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Computes the payable amount for the given fields.
    ///
    /// Never fails: invalid entries contribute zero and arithmetic
    /// saturates at the bounds of [`Decimal`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use zakat_core::{AssetField, Assets, Investments, WealthAggregator};
    ///
    /// let assets: Assets = [(AssetField::Cash, "abc"), (AssetField::Gold, "200")]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let payable = WealthAggregator::default().compute_payable(&assets, &Investments::new());
    ///
    /// assert_eq!(payable, dec!(5.00));
    /// ```
    pub fn compute_payable(
        &self,
        assets: &Assets,
        investments: &Investments,
    ) -> Decimal {
        self.summarize(assets, investments).payable
    }

    /// Computes the payable amount along with the intermediate totals.
    pub fn summarize(
        &self,
        assets: &Assets,
        investments: &Investments,
    ) -> WealthSummary {
        // Steps 1 and 2
        let total_assets = assets.total();
        let total_investments = investments.total();

        // Step 3
        let total_wealth = total_assets.saturating_add(total_investments);

        // Step 4
        let payable = total_wealth.saturating_mul(self.rate);

        debug!(
            total_assets = %total_assets,
            total_investments = %total_investments,
            total_wealth = %total_wealth,
            rate = %self.rate,
            payable = %payable,
            "computed zakat payable"
        );

        WealthSummary {
            total_assets,
            total_investments,
            total_wealth,
            rate: self.rate,
            payable,
        }
    }
}

/// Computes `(Σ assets + Σ investments) × rate`.
///
/// Shorthand for [`WealthAggregator::compute_payable`].
pub fn compute_payable(
    assets: &Assets,
    investments: &Investments,
    rate: Decimal,
) -> Decimal {
    WealthAggregator::new(rate).compute_payable(assets, investments)
}
