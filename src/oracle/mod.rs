//! Utility ordering oracle.
//!
//! The oracle answers one question: given a class token, where does the
//! styling framework place it in its generated stylesheet? Tokens it does not
//! recognize have no position at all.
//!
//! # Architecture
//!
//! - [`ClassOrder`] is the narrow, swappable `rank` interface. Anything that
//!   can rank a token (the built-in [`DesignSystem`], a closure in a test, an
//!   adapter over some other engine) implements it.
//! - [`ClassRanker`] is the adapter the sorter talks to. It strips quoting
//!   artifacts before delegating to the wrapped oracle.
//! - [`DesignSystem`] is the built-in oracle, derived from a resolved
//!   [`TailwindConfig`](crate::config::TailwindConfig): default theme, variant
//!   table, core utility families and configuration plugins.
//!
//! # Sort keys
//!
//! A [`SortKey`] compares as the tuple `(variants, layer, family, rule)`:
//!
//! - **variants**: the set of variant bits on the token, compared like a big
//!   integer (highest bit first). Utilities without variants come first and
//!   late-registered variants (screens) come after state variants.
//! - **layer**: components before utilities before arbitrary properties.
//! - **family**: position of the utility family in generation order.
//! - **rule**: position of the matching rule inside its family.

pub mod candidate;
mod design_system;
pub mod theme;
pub mod utilities;
pub mod variants;

pub use design_system::DesignSystem;

/// Stylesheet layer a utility is generated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Components,
    Utilities,
    /// Arbitrary properties such as `[mask-type:alpha]`
    Arbitrary,
}

/// Variant bits of a token, highest bit first.
///
/// Ordering a descending list of bit indices lexicographically is the same as
/// comparing the bit sets as integers, without a width limit on how many
/// variants a configuration may register.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantOrder(Vec<u16>);

impl VariantOrder {
    pub fn from_bits(bits: impl IntoIterator<Item = u16>) -> Self {
        let mut bits: Vec<u16> = bits.into_iter().collect();
        bits.sort_unstable_by(|a, b| b.cmp(a));
        bits.dedup();
        Self(bits)
    }
}

/// Opaque position of a recognized utility in the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    variants: VariantOrder,
    layer: Layer,
    family: u32,
    rule: u32,
}

impl SortKey {
    pub(crate) fn new(variants: VariantOrder, layer: Layer, family: u32, rule: u32) -> Self {
        Self {
            variants,
            layer,
            family,
            rule,
        }
    }

    /// A key for oracles that only know a flat position.
    ///
    /// Keys built this way compare by `position` alone.
    pub fn ordinal(position: u32) -> Self {
        Self::new(VariantOrder::default(), Layer::Utilities, position, 0)
    }
}

/// The `rank` interface of an ordering oracle.
///
/// Implementations must be deterministic for a fixed configuration and safe to
/// share across worker threads.
pub trait ClassOrder: Send + Sync {
    /// Position of `class` in the generated stylesheet, or `None` when the
    /// oracle does not recognize it.
    fn rank(&self, class: &str) -> Option<SortKey>;
}

impl<F> ClassOrder for F
where
    F: Fn(&str) -> Option<SortKey> + Send + Sync,
{
    fn rank(&self, class: &str) -> Option<SortKey> {
        self(class)
    }
}

/// Adapter between raw tokens lifted from source text and an oracle.
#[derive(Clone, Copy)]
pub struct ClassRanker<'a> {
    order: &'a dyn ClassOrder,
}

impl<'a> ClassRanker<'a> {
    pub fn new(order: &'a dyn ClassOrder) -> Self {
        Self { order }
    }

    pub fn rank(&self, token: &str) -> Option<SortKey> {
        let class = strip_quoting(token);
        if class.is_empty() {
            return None;
        }
        self.order.rank(class)
    }
}

impl std::fmt::Debug for ClassRanker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassRanker").finish_non_exhaustive()
    }
}

/// Remove stray quotes and escape backslashes left on a token by the
/// surrounding literal.
fn strip_quoting(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, '"' | '\'' | '`' | '\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_order_compares_like_bitsets() {
        let base = VariantOrder::default();
        let hover = VariantOrder::from_bits([3]);
        let hover_focus = VariantOrder::from_bits([3, 1]);
        let screen = VariantOrder::from_bits([40]);

        assert!(base < hover);
        assert!(hover < hover_focus);
        assert!(hover_focus < screen);
        assert!(VariantOrder::from_bits([5, 2]) < VariantOrder::from_bits([5, 3]));
    }

    #[test]
    fn test_variant_order_ignores_duplicates() {
        assert_eq!(
            VariantOrder::from_bits([2, 7, 2]),
            VariantOrder::from_bits([7, 2])
        );
    }

    #[test]
    fn test_variants_dominate_layer_and_family() {
        let plain_late = SortKey::new(VariantOrder::default(), Layer::Arbitrary, 900, 0);
        let variant_early = SortKey::new(VariantOrder::from_bits([0]), Layer::Components, 0, 0);
        assert!(plain_late < variant_early);
    }

    #[test]
    fn test_ranker_strips_quoting_artifacts() {
        let order = |class: &str| (class == "p-0").then(|| SortKey::ordinal(1));
        let ranker = ClassRanker::new(&order);

        assert_eq!(ranker.rank("p-0"), Some(SortKey::ordinal(1)));
        assert_eq!(ranker.rank("'p-0'"), Some(SortKey::ordinal(1)));
        assert_eq!(ranker.rank("\\\"p-0\\\""), Some(SortKey::ordinal(1)));
        assert_eq!(ranker.rank("''"), None);
    }
}
