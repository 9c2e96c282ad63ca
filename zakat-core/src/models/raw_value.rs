use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::coerce_amount;

/// Text exactly as the user typed it into a field.
///
/// Values are never validated on entry. Whatever cannot be read as a number
/// contributes zero when the form is totalled (see [`RawValue::amount`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawValue(String);

impl RawValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The numeric contribution of this value.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use zakat_core::RawValue;
    ///
    /// assert_eq!(RawValue::from(" 250.5 ").amount(), dec!(250.5));
    /// assert_eq!(RawValue::from("abc").amount(), dec!(0));
    /// assert_eq!(RawValue::default().amount(), dec!(0));
    /// ```
    pub fn amount(&self) -> Decimal {
        coerce_amount(&self.0)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}
