//! Tree-backed item store.
//!
//! Items live in an [`ItemAvl`] ordered by the store's comparator, so
//! range queries prune whole subtrees instead of scanning. The erase
//! path reports the removed weight as an `Option`, which keeps
//! zero-weight items distinguishable from "not found" when updating
//! the running total.

use crate::avl::ItemAvl;
use crate::compare::Compare;
use crate::inventory::Inventory;
use crate::item::Item;

use rustc_hash::FxHashSet;

/// An ordered item store over an AVL tree parameterized by the
/// comparator `C`.
pub struct TreeInventory<C: Compare> {
    items: ItemAvl<C>,
    equipped: Option<Box<Item>>,
    weight: f32,
}

impl<C: Compare> TreeInventory<C> {
    pub fn new() -> TreeInventory<C> {
        return TreeInventory {
            items: ItemAvl::new(),
            equipped: None,
            weight: 0.0,
        };
    }

    /// A deep copy of the backing tree, for read-only inspection.
    pub fn items(&self) -> ItemAvl<C> {
        return self.items.clone();
    }
}

impl<C: Compare> Inventory for TreeInventory<C> {
    fn pickup(&mut self, item: Item) -> bool {
        let weight = item.weight();
        if !self.items.insert(item) {
            return false;
        }
        self.weight += weight;
        return true;
    }

    fn discard(&mut self, name: &str) -> bool {
        let Some(weight) = self.items.erase(name) else {
            return false;
        };
        self.weight -= weight;
        return true;
    }

    fn contains(&self, name: &str) -> bool {
        return self.items.contains(name);
    }

    fn query(&self, start: &Item, end: &Item) -> FxHashSet<Item> {
        return self.items.range(start, end);
    }

    fn equip(&mut self, item: Item) {
        self.equipped = Some(Box::new(item));
    }

    fn discard_equipped(&mut self) {
        self.equipped = None;
    }

    fn equipped(&self) -> Option<&Item> {
        return self.equipped.as_deref();
    }

    fn weight(&self) -> f32 {
        return self.weight;
    }

    fn len(&self) -> usize {
        return self.items.len();
    }
}

impl<C: Compare> Default for TreeInventory<C> {
    fn default() -> Self {
        return Self::new();
    }
}
