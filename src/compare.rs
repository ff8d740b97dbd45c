//! Comparator strategies: pluggable total orders over items.
//!
//! A store or tree is parameterized by exactly one strategy, fixed at
//! construction. Each strategy orders items along a single dimension:
//! name, weight, or kind. Strategies are stateless zero-sized types;
//! the trait's functions take no receiver, mirroring a bundle of free
//! functions chosen at compile time.

use crate::item::Item;

/// Two weights closer than this compare equal. Every less-or-equal
/// check goes through [`Compare::leq`], which is built on `equal`, so
/// range boundaries and tree ordering agree on the tolerance.
pub const WEIGHT_EPSILON: f32 = 1e-5;

/// A total, consistent pairwise ordering over items along one
/// dimension. `leq` must remain `less_than || equal`; implementors
/// override the two primitives only.
pub trait Compare {
    fn less_than(a: &Item, b: &Item) -> bool;

    fn equal(a: &Item, b: &Item) -> bool;

    fn leq(a: &Item, b: &Item) -> bool {
        return Self::less_than(a, b) || Self::equal(a, b);
    }
}

/// Lexicographic order on item names.
pub struct ByName;

impl Compare for ByName {
    fn less_than(a: &Item, b: &Item) -> bool {
        return a.name() < b.name();
    }

    fn equal(a: &Item, b: &Item) -> bool {
        return a.name() == b.name();
    }
}

/// Numeric order on item weights, with epsilon-tolerant equality.
pub struct ByWeight;

impl Compare for ByWeight {
    fn less_than(a: &Item, b: &Item) -> bool {
        return a.weight() < b.weight();
    }

    fn equal(a: &Item, b: &Item) -> bool {
        return (a.weight() - b.weight()).abs() < WEIGHT_EPSILON;
    }
}

/// Declaration order on item kinds.
pub struct ByKind;

impl Compare for ByKind {
    fn less_than(a: &Item, b: &Item) -> bool {
        return a.kind() < b.kind();
    }

    fn equal(a: &Item, b: &Item) -> bool {
        return a.kind() == b.kind();
    }
}
