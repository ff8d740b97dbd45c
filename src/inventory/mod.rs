//! Item stores: one contract, interchangeable backends.
//!
//! [`Inventory`] is the uniform surface both backends satisfy
//! identically. [`HashInventory`] keeps items in a hash set for fast
//! membership; [`TreeInventory`] keeps them comparator-ordered in an
//! AVL tree so range queries can prune. Callers pick the backend and
//! the comparator at construction and everything downstream of that
//! choice routes through the trait.
//!
//! [`GridInventory`] is the odd one out: a fixed grid of slots with a
//! positional surface rather than a keyed one. It shares the equipped
//! slot and weight bookkeeping but not the trait.

mod grid;
mod hash;
mod tree;

pub use grid::GridInventory;
pub use grid::OutOfRange;
pub use hash::HashInventory;
pub use tree::TreeInventory;

use rustc_hash::FxHashSet;

use crate::item::Item;

/// The store contract: keyed membership, an equipped slot, aggregate
/// weight, and inclusive range queries under the store's comparator.
///
/// Failure is always reported by return value and never by partial
/// mutation: an operation that returns `false` leaves the store
/// exactly as it found it.
pub trait Inventory {
    /// Add an item, unless one with the same name is already stored.
    /// Returns whether the store changed; on success the item's weight
    /// joins the running total.
    fn pickup(&mut self, item: Item) -> bool;

    /// Remove the item with the given name. Returns whether the store
    /// changed; on success the item's weight leaves the running total.
    fn discard(&mut self, name: &str) -> bool;

    /// Whether an item with the given name is stored.
    fn contains(&self, name: &str) -> bool;

    /// All stored items `i` with `leq(start, i) && leq(i, end)` under
    /// the store's comparator, bounds included. Empty whenever `end`
    /// compares strictly less than `start`.
    fn query(&self, start: &Item, end: &Item) -> FxHashSet<Item>;

    /// Place an item in the equipped slot. Any previous occupant is
    /// dropped; there is no way to leak it.
    fn equip(&mut self, item: Item);

    /// Drop the equipped item, if any.
    fn discard_equipped(&mut self);

    /// The equipped item, if any. The slot is independent of the main
    /// store: its weight never counts toward [`Inventory::weight`].
    fn equipped(&self) -> Option<&Item>;

    /// Sum of the weights of all stored items, maintained
    /// incrementally on every pickup and discard.
    fn weight(&self) -> f32;

    /// Number of stored items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}
