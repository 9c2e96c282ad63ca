//! Zakat calculation modules.
//!
//! [`common`] holds the numeric coercion and rounding shared by every
//! calculation; [`wealth`] totals the form and applies the zakat rate.

pub mod common;
pub mod wealth;

pub use wealth::{WealthAggregator, WealthSummary, ZAKAT_RATE, compute_payable};
