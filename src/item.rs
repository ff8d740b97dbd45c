//! Items: named, weighted, typed values.
//!
//! An item's name is its identity. Equality and hashing look at the
//! name alone, so any set keyed on whole items is really keyed on
//! names. Ordering along other dimensions (weight, kind) is the
//! comparator's job, not the item's.

use std::hash::Hash;
use std::hash::Hasher;

/// The closed set of item categories.
///
/// The derived `Ord` follows declaration order, which is the ordering
/// the kind comparator exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    /// Placeholder for an empty slot; not a real item.
    #[default]
    None,
    Weapon,
    Accessory,
    Armor,
}

/// A named, weighted, typed value. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Item {
    name: String,
    weight: f32,
    kind: ItemKind,
}

impl Item {
    /// Construct a new item. Weight is non-negative by convention;
    /// nothing here enforces it.
    pub fn new(name: impl Into<String>, weight: f32, kind: ItemKind) -> Item {
        return Item {
            name: name.into(),
            weight,
            kind,
        };
    }

    /// An empty-slot placeholder: no name, zero weight, kind `None`.
    pub fn empty() -> Item {
        return Item::new("", 0.0, ItemKind::None);
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        return &self.name;
    }

    #[inline(always)]
    pub fn weight(&self) -> f32 {
        return self.weight;
    }

    #[inline(always)]
    pub fn kind(&self) -> ItemKind {
        return self.kind;
    }
}

/// Items compare equal when their names match, regardless of weight
/// or kind. This is the identity used for set and tree membership.
impl PartialEq for Item {
    fn eq(&self, other: &Item) -> bool {
        return self.name == other.name;
    }
}

impl Eq for Item {}

/// Hashes the name only, consistent with [`PartialEq`].
impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn equality_is_by_name_only() {
        let a = Item::new("Sword", 5.0, ItemKind::Weapon);
        let b = Item::new("Sword", 9.0, ItemKind::Armor);
        let c = Item::new("Shield", 5.0, ItemKind::Weapon);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_set_deduplicates_by_name() {
        let mut set = FxHashSet::default();
        assert!(set.insert(Item::new("Sword", 5.0, ItemKind::Weapon)));
        assert!(!set.insert(Item::new("Sword", 9.0, ItemKind::Armor)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn kind_order_follows_declaration() {
        assert!(ItemKind::None < ItemKind::Weapon);
        assert!(ItemKind::Weapon < ItemKind::Accessory);
        assert!(ItemKind::Accessory < ItemKind::Armor);
    }

    #[test]
    fn display_prints_the_name() {
        let item = Item::new("Sword", 5.0, ItemKind::Weapon);
        assert_eq!(item.to_string(), "Sword");
    }

    #[test]
    fn empty_slot_placeholder() {
        let slot = Item::empty();
        assert_eq!(slot.name(), "");
        assert_eq!(slot.weight(), 0.0);
        assert_eq!(slot.kind(), ItemKind::None);
    }
}
