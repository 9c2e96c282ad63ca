mod asset_field;
mod category;
mod field_key;
mod field_set;
mod investment_field;
mod raw_value;

pub use asset_field::AssetField;
pub use category::Category;
pub use field_key::FieldKey;
pub use field_set::{Assets, FieldSet, Investments, update_field};
pub use investment_field::InvestmentField;
pub use raw_value::RawValue;
