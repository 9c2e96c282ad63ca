use serde::{Deserialize, Serialize};

use super::FieldKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentField {
    Stocks,
    MutualFunds,
    RealEstate,
    Other,
}

impl FieldKey for InvestmentField {
    const ALL: &'static [Self] = &[
        Self::Stocks,
        Self::MutualFunds,
        Self::RealEstate,
        Self::Other,
    ];

    fn index(&self) -> usize {
        *self as usize
    }

    fn key(&self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::MutualFunds => "mutualFunds",
            Self::RealEstate => "realEstate",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::MutualFunds => "Mutual Funds",
            Self::RealEstate => "Real Estate",
            Self::Other => "Other",
        }
    }
}
