use serde::{Deserialize, Serialize};

use super::FieldKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetField {
    Cash,
    Gold,
    Silver,
    Other,
}

impl FieldKey for AssetField {
    const ALL: &'static [Self] = &[Self::Cash, Self::Gold, Self::Silver, Self::Other];

    fn index(&self) -> usize {
        *self as usize
    }

    fn key(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Other => "Other",
        }
    }
}
