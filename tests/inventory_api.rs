//! Scenario tests for the store contract, run against both backends
//! through the same generic helpers.

use rustc_hash::FxHashSet;
use satchel::compare::ByKind;
use satchel::compare::ByName;
use satchel::compare::ByWeight;
use satchel::inventory::HashInventory;
use satchel::inventory::Inventory;
use satchel::inventory::TreeInventory;
use satchel::item::Item;
use satchel::item::ItemKind;

// =============================================================================
// Generic scenarios
// =============================================================================

fn duplicate_pickup_scenario<I: Inventory>(mut inv: I) {
    assert!(inv.pickup(Item::new("Sword", 5.0, ItemKind::Weapon)));
    assert!(!inv.pickup(Item::new("Sword", 9.0, ItemKind::Armor)));
    assert_eq!(inv.len(), 1);
    assert_eq!(inv.weight(), 5.0);
    assert!(inv.contains("Sword"));
}

fn discard_from_empty_scenario<I: Inventory>(mut inv: I) {
    assert!(!inv.discard("Sword"));
    assert_eq!(inv.weight(), 0.0);
    assert_eq!(inv.len(), 0);
}

fn equip_replace_scenario<I: Inventory>(mut inv: I) {
    inv.equip(Item::new("X", 1.0, ItemKind::Weapon));
    inv.equip(Item::new("Y", 2.0, ItemKind::Weapon));
    // Y replaced X; X was dropped by the replacement and is gone.
    assert_eq!(inv.equipped().map(Item::name), Some("Y"));
    inv.discard_equipped();
    assert!(inv.equipped().is_none());
    inv.discard_equipped();
    assert!(inv.equipped().is_none());
}

fn weight_range_scenario<I: Inventory>(mut inv: I) {
    for (name, weight) in [("a", 0.4), ("b", 5.0), ("c", 10.9), ("d", 11.0)] {
        assert!(inv.pickup(Item::new(name, weight, ItemKind::None)));
    }
    let start = Item::new("lo", 0.4, ItemKind::None);
    let end = Item::new("hi", 10.9, ItemKind::None);
    let matching = inv.query(&start, &end);

    let names: FxHashSet<&str> = matching.iter().map(Item::name).collect();
    assert_eq!(names, FxHashSet::from_iter(["a", "b", "c"]));
}

fn inverted_range_scenario<I: Inventory>(mut inv: I) {
    for (name, weight) in [("a", 0.4), ("b", 5.0)] {
        inv.pickup(Item::new(name, weight, ItemKind::None));
    }
    let start = Item::new("lo", 10.0, ItemKind::None);
    let end = Item::new("hi", 1.0, ItemKind::None);
    assert!(inv.query(&start, &end).is_empty());
}

// =============================================================================
// Both backends, same behavior
// =============================================================================

#[test]
fn duplicate_pickup_on_both_backends() {
    duplicate_pickup_scenario(HashInventory::<ByName>::new());
    duplicate_pickup_scenario(TreeInventory::<ByName>::new());
}

#[test]
fn discard_from_empty_on_both_backends() {
    discard_from_empty_scenario(HashInventory::<ByName>::new());
    discard_from_empty_scenario(TreeInventory::<ByName>::new());
}

#[test]
fn equip_replace_on_both_backends() {
    equip_replace_scenario(HashInventory::<ByName>::new());
    equip_replace_scenario(TreeInventory::<ByName>::new());
}

#[test]
fn weight_range_on_both_backends() {
    weight_range_scenario(HashInventory::<ByWeight>::new());
    weight_range_scenario(TreeInventory::<ByWeight>::new());
}

#[test]
fn inverted_range_on_both_backends() {
    inverted_range_scenario(HashInventory::<ByWeight>::new());
    inverted_range_scenario(TreeInventory::<ByWeight>::new());
}

// =============================================================================
// Comparator variety
// =============================================================================

#[test]
fn kind_comparator_selects_contiguous_kinds() {
    let mut inv = TreeInventory::<ByKind>::new();
    inv.pickup(Item::new("Sword", 5.0, ItemKind::Weapon));
    inv.pickup(Item::new("Ring", 0.1, ItemKind::Accessory));
    inv.pickup(Item::new("Plate", 20.0, ItemKind::Armor));
    inv.pickup(Item::new("Rock", 1.0, ItemKind::None));

    // Everything from Weapon up to Accessory, leaving None and Armor out.
    let start = Item::new("", 0.0, ItemKind::Weapon);
    let end = Item::new("", 0.0, ItemKind::Accessory);
    let matching = inv.query(&start, &end);
    let names: FxHashSet<&str> = matching.iter().map(Item::name).collect();
    assert_eq!(names, FxHashSet::from_iter(["Sword", "Ring"]));
}

#[test]
fn range_boundaries_honor_the_weight_epsilon() {
    let mut inv = TreeInventory::<ByWeight>::new();
    inv.pickup(Item::new("edge", 10.9, ItemKind::None));

    // A bound a hair under the stored weight still includes it: the
    // comparator's epsilon applies to boundary checks exactly as it
    // applies to ordering.
    let start = Item::new("lo", 0.0, ItemKind::None);
    let end = Item::new("hi", 10.9 - 1e-6, ItemKind::None);
    assert_eq!(inv.query(&start, &end).len(), 1);
}

// =============================================================================
// Backend equivalence on a fixed walk
// =============================================================================

#[test]
fn hash_and_tree_agree_on_a_mixed_walk() {
    let mut hash = HashInventory::<ByWeight>::new();
    let mut tree = TreeInventory::<ByWeight>::new();

    let ops: &[(&str, f32)] = &[
        ("anvil", 50.0),
        ("feather", 0.25),
        ("sword", 5.0),
        ("anvil", 12.0), // duplicate name, both must refuse
        ("rope", 2.5),
    ];
    for &(name, weight) in ops {
        let a = hash.pickup(Item::new(name, weight, ItemKind::None));
        let b = tree.pickup(Item::new(name, weight, ItemKind::None));
        assert_eq!(a, b, "pickup({name}) diverged");
    }
    assert_eq!(hash.discard("sword"), tree.discard("sword"));
    assert_eq!(hash.discard("ghost"), tree.discard("ghost"));

    assert_eq!(hash.len(), tree.len());
    assert_eq!(hash.weight(), tree.weight());
    for name in ["anvil", "feather", "sword", "rope", "ghost"] {
        assert_eq!(hash.contains(name), tree.contains(name), "contains({name}) diverged");
    }

    let start = Item::new("", 0.0, ItemKind::None);
    let end = Item::new("", 10.0, ItemKind::None);
    assert_eq!(hash.query(&start, &end), tree.query(&start, &end));
}
