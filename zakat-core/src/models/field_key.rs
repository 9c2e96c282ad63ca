use std::fmt::Debug;

/// A fixed key of a [`FieldSet`](crate::FieldSet).
///
/// Implementors are fieldless enums whose variants are listed in
/// [`FieldKey::ALL`] in declaration order, so that `index()` can be the
/// variant's discriminant.
pub trait FieldKey: Copy + Eq + Debug + 'static {
    /// Every key, in display order.
    const ALL: &'static [Self];

    /// Position of this key within [`FieldKey::ALL`].
    fn index(&self) -> usize;

    /// Identifier used by the form (e.g. `"mutualFunds"`).
    fn key(&self) -> &'static str;

    /// Human readable label (e.g. `"Mutual Funds"`).
    fn label(&self) -> &'static str;

    /// Looks up a key by its form identifier.
    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == s)
    }
}
