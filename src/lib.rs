//! Satchel - an in-memory keyed item store with swappable backends.
//!
//! Items are named, weighted, and typed. A store keeps them in either
//! a hash set (fast membership, no order) or a height-balanced tree
//! (ordered, prunable range queries), behind one [`inventory::Inventory`]
//! contract. Ordering is a pluggable [`compare::Compare`] strategy over
//! a single dimension: name, weight, or kind.
//!
//! # Quick Start
//!
//! ```
//! use satchel::compare::ByWeight;
//! use satchel::inventory::{Inventory, TreeInventory};
//! use satchel::item::{Item, ItemKind};
//!
//! // A store ordered by weight, backed by a balanced tree.
//! let mut stash = TreeInventory::<ByWeight>::new();
//! stash.pickup(Item::new("Sword", 5.0, ItemKind::Weapon));
//! stash.pickup(Item::new("Feather", 0.1, ItemKind::Accessory));
//! stash.pickup(Item::new("Anvil", 50.0, ItemKind::None));
//!
//! // Everything weighing between 1 and 10, bounds included.
//! let carryable = stash.query(
//!     &Item::new("", 1.0, ItemKind::None),
//!     &Item::new("", 10.0, ItemKind::None),
//! );
//! assert_eq!(carryable.len(), 1);
//! assert!(stash.contains("Sword"));
//! ```

pub mod avl;
pub mod compare;
pub mod inventory;
pub mod item;
