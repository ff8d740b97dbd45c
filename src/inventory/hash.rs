//! Hash-set-backed item store.
//!
//! Membership is O(1) on average and always keyed by name, since items
//! hash and compare by name alone. Range queries have nothing to prune
//! and scan every item. No iteration order is promised.

use std::marker::PhantomData;

use rustc_hash::FxHashSet;

use crate::compare::Compare;
use crate::inventory::Inventory;
use crate::item::Item;

/// An unordered item store over an `FxHashSet`, with range queries
/// evaluated under the comparator `C`.
pub struct HashInventory<C: Compare> {
    items: FxHashSet<Item>,
    equipped: Option<Box<Item>>,
    weight: f32,
    _compare: PhantomData<C>,
}

impl<C: Compare> HashInventory<C> {
    pub fn new() -> HashInventory<C> {
        return HashInventory {
            items: FxHashSet::default(),
            equipped: None,
            weight: 0.0,
            _compare: PhantomData,
        };
    }

    /// A copy of the backing set, for read-only inspection.
    pub fn items(&self) -> FxHashSet<Item> {
        return self.items.clone();
    }

    /// A probe value for name-keyed set lookups. Weight and kind are
    /// irrelevant to hashing and equality.
    fn probe(name: &str) -> Item {
        return Item::new(name, 0.0, crate::item::ItemKind::None);
    }
}

impl<C: Compare> Inventory for HashInventory<C> {
    fn pickup(&mut self, item: Item) -> bool {
        let weight = item.weight();
        if !self.items.insert(item) {
            return false;
        }
        self.weight += weight;
        return true;
    }

    fn discard(&mut self, name: &str) -> bool {
        let Some(item) = self.items.take(&Self::probe(name)) else {
            return false;
        };
        self.weight -= item.weight();
        return true;
    }

    fn contains(&self, name: &str) -> bool {
        return self.items.contains(&Self::probe(name));
    }

    fn query(&self, start: &Item, end: &Item) -> FxHashSet<Item> {
        if C::less_than(end, start) {
            return FxHashSet::default();
        }
        return self
            .items
            .iter()
            .filter(|item| C::leq(start, item) && C::leq(item, end))
            .cloned()
            .collect();
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

impl<C: Compare> Default for HashInventory<C> {
    fn default() -> Self {
        return Self::new();
    }
}
