//! Fixed-shape groups of form fields.
//!
//! A [`FieldSet`] holds exactly one [`RawValue`] per key of its key type.
//! Keys cannot be added or removed; only values change.

use std::marker::PhantomData;

use rust_decimal::Decimal;

use super::{AssetField, FieldKey, InvestmentField, RawValue};

/// Cash, gold, silver and other assets.
pub type Assets = FieldSet<AssetField>;

/// Stocks, mutual funds, real estate and other investments.
pub type Investments = FieldSet<InvestmentField>;

/// One raw value per key of `K`, stored in [`FieldKey::ALL`] order.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use zakat_core::{AssetField, Assets};
///
/// let assets: Assets = [(AssetField::Cash, "1000"), (AssetField::Gold, "500")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(assets.get(AssetField::Cash).as_str(), "1000");
/// assert!(assets.get(AssetField::Silver).is_empty());
/// assert_eq!(assets.total(), dec!(1500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet<K: FieldKey> {
    values: Vec<RawValue>,
    _keys: PhantomData<K>,
}

impl<K: FieldKey> Default for FieldSet<K> {
    fn default() -> Self {
        Self {
            values: vec![RawValue::default(); K::ALL.len()],
            _keys: PhantomData,
        }
    }
}

impl<K: FieldKey> FieldSet<K> {
    /// Creates a field set with every value empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        key: K,
    ) -> &RawValue {
        &self.values[key.index()]
    }

    pub fn set(
        &mut self,
        key: K,
        value: impl Into<RawValue>,
    ) {
        self.values[key.index()] = value.into();
    }

    /// Returns a copy of this set with only `key` changed.
    pub fn with_value(
        &self,
        key: K,
        value: impl Into<RawValue>,
    ) -> Self {
        let mut updated = self.clone();
        updated.set(key, value);
        updated
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &RawValue)> + '_ {
        K::ALL.iter().copied().zip(self.values.iter())
    }

    /// Iterates the raw values in key order.
    pub fn values(&self) -> impl Iterator<Item = &RawValue> + '_ {
        self.values.iter()
    }

    /// Sum of every value's numeric contribution.
    ///
    /// Unparseable and empty values add zero. The sum saturates at the
    /// bounds of [`Decimal`].
    pub fn total(&self) -> Decimal {
        self.values
            .iter()
            .map(RawValue::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

impl<K: FieldKey, V: Into<RawValue>> FromIterator<(K, V)> for FieldSet<K> {
    /// Builds a set from `(key, value)` pairs; later pairs win and missing
    /// keys stay empty.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (key, value) in iter {
            set.set(key, value);
        }
        set
    }
}

/// Returns `field_set` with only `key` replaced by `value`.
///
/// The input is left untouched; callers own re-rendering.
pub fn update_field<K: FieldKey>(
    field_set: &FieldSet<K>,
    key: K,
    value: impl Into<RawValue>,
) -> FieldSet<K> {
    field_set.with_value(key, value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_set_has_every_key_empty() {
        let assets = Assets::new();

        let keys: Vec<_> = assets.iter().map(|(key, _)| key).collect();

        assert_eq!(keys, AssetField::ALL.to_vec());
        assert!(assets.values().all(RawValue::is_empty));
    }

    #[test]
    fn update_field_changes_only_the_given_key() {
        let before: Investments = [
            (InvestmentField::Stocks, "2000"),
            (InvestmentField::RealEstate, "1500"),
        ]
        .into_iter()
        .collect();

        let after = update_field(&before, InvestmentField::MutualFunds, "300");

        assert_eq!(after.get(InvestmentField::MutualFunds).as_str(), "300");
        assert_eq!(after.get(InvestmentField::Stocks).as_str(), "2000");
        assert_eq!(after.get(InvestmentField::RealEstate).as_str(), "1500");
        assert!(after.get(InvestmentField::Other).is_empty());
    }

    #[test]
    fn update_field_leaves_original_untouched() {
        let before = Assets::new();

        let _after = update_field(&before, AssetField::Cash, "10");

        assert!(before.get(AssetField::Cash).is_empty());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut assets = Assets::new();

        assets.set(AssetField::Gold, "5");
        assets.set(AssetField::Gold, "7");

        assert_eq!(assets.get(AssetField::Gold).as_str(), "7");
        assert_eq!(assets.total(), dec!(7));
    }

    #[test]
    fn total_skips_invalid_values() {
        let assets: Assets = [
            (AssetField::Cash, "abc"),
            (AssetField::Gold, "200"),
            (AssetField::Silver, ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(assets.total(), dec!(200));
    }

    #[test]
    fn total_of_empty_set_is_zero() {
        assert_eq!(Investments::new().total(), Decimal::ZERO);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let huge = "70000000000000000000000000000";
        let assets: Assets = [(AssetField::Cash, huge), (AssetField::Gold, huge)]
            .into_iter()
            .collect();

        assert_eq!(assets.total(), Decimal::MAX);
    }
}
