//! Height-balanced ordered item tree.
//!
//! An AVL tree over [`Item`]s whose ordering is injected through a
//! [`Compare`] strategy. Each node exclusively owns its children, so
//! the rotation algorithms work by moving boxes rather than juggling
//! raw pointers.
//!
//! Two different keys are in play and it matters which operation uses
//! which:
//! - Uniqueness is always by item name. `insert` refuses duplicates by
//!   name, and `erase`/`contains` search by name, visiting both
//!   subtrees since the name says nothing about which side an item
//!   landed on under an arbitrary comparator.
//! - Placement is by comparator. Descent on insert and the pruning in
//!   [`ItemAvl::range`] consult `C` alone.
//!
//! Operations:
//! - insert: O(n) uniqueness check, then O(log n) descent + rebalance
//! - erase: O(n) name search, rebalancing every ancestor on the way up
//! - range: pruned in-order traversal, skipping subtrees outside the
//!   bounds
//! - iter / levels: lazy, read-only, restartable traversals

use std::marker::PhantomData;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::compare::Compare;
use crate::item::Item;

/// Maximum tolerated difference between sibling subtree heights.
const ALLOWED_IMBALANCE: i32 = 1;

type Link = Option<Box<Node>>;

/// A tree node: an item plus cached height and owned children.
///
/// A leaf has height 0; an absent child reads as height -1. The cached
/// height is maintained by the rebalancing pass and never recomputed
/// from scratch.
#[derive(Clone, Debug)]
pub struct Node {
    value: Item,
    height: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(value: Item) -> Node {
        return Node {
            value,
            height: 0,
            left: None,
            right: None,
        };
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    #[inline(always)]
    pub fn value(&self) -> &Item {
        return &self.value;
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        return self.height;
    }

    #[inline(always)]
    pub fn left(&self) -> Option<&Node> {
        return self.left.as_deref();
    }

    #[inline(always)]
    pub fn right(&self) -> Option<&Node> {
        return self.right.as_deref();
    }
}

/// Height of a child link: the node's cached height, or -1 if absent.
#[inline(always)]
fn height(link: &Link) -> i32 {
    return link.as_ref().map_or(-1, |node| node.height);
}

/// An AVL tree of items, ordered by the comparator `C`.
pub struct ItemAvl<C: Compare> {
    root: Link,
    len: usize,
    _compare: PhantomData<C>,
}

impl<C: Compare> ItemAvl<C> {
    pub fn new() -> ItemAvl<C> {
        return ItemAvl {
            root: None,
            len: 0,
            _compare: PhantomData,
        };
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.len;
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Read-only access to the root node, for structural inspection.
    #[inline(always)]
    pub fn root(&self) -> Option<&Node> {
        return self.root.as_deref();
    }

    /// Insert an item, unless one with the same name is already
    /// stored anywhere in the tree. Returns whether the tree changed.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(item.name()) {
            return false;
        }
        Self::insert_at(&mut self.root, item);
        self.len += 1;
        return true;
    }

    fn insert_at(link: &mut Link, item: Item) {
        match link {
            None => *link = Some(Box::new(Node::leaf(item))),
            Some(node) => {
                if C::less_than(&item, &node.value) {
                    Self::insert_at(&mut node.left, item);
                } else {
                    Self::insert_at(&mut node.right, item);
                }
                Self::rebalance(node);
            }
        }
    }

    /// Erase the item with the given name, returning its weight, or
    /// `None` if no such item is stored. Every ancestor of the removed
    /// node is rebalanced on the way back up.
    pub fn erase(&mut self, name: &str) -> Option<f32> {
        let weight = Self::erase_at(&mut self.root, name)?;
        self.len -= 1;
        return Some(weight);
    }

    fn erase_at(link: &mut Link, name: &str) -> Option<f32> {
        let node = link.as_mut()?;

        if node.value.name() != name {
            // The name carries no ordering information, so the search
            // has to try both sides.
            let erased = match Self::erase_at(&mut node.left, name) {
                Some(weight) => Some(weight),
                None => Self::erase_at(&mut node.right, name),
            };
            if erased.is_some() {
                Self::rebalance(node);
            }
            return erased;
        }

        if node.left.is_some() && node.right.is_some() {
            // Two children: swap in the in-order successor, then chase
            // the doomed value down into the right subtree.
            let successor = Self::min_node(node.right.as_mut().expect("two children"));
            std::mem::swap(&mut node.value, &mut successor.value);
            let erased = Self::erase_at(&mut node.right, name);
            Self::rebalance(node);
            return erased;
        }

        // Zero or one child: splice the remaining subtree into place.
        let node = link.take().expect("node is present");
        let weight = node.value.weight();
        *link = if node.left.is_some() { node.left } else { node.right };
        return Some(weight);
    }

    fn min_node(node: &mut Box<Node>) -> &mut Box<Node> {
        if node.left.is_some() {
            return Self::min_node(node.left.as_mut().expect("just checked"));
        }
        return node;
    }

    /// Whether an item with the given name is stored anywhere in the
    /// tree. Name search, independent of the comparator.
    pub fn contains(&self, name: &str) -> bool {
        return Self::contains_at(self.root.as_deref(), name);
    }

    fn contains_at(link: Option<&Node>, name: &str) -> bool {
        let Some(node) = link else {
            return false;
        };
        if node.value.name() == name {
            return true;
        }
        return Self::contains_at(node.left.as_deref(), name)
            || Self::contains_at(node.right.as_deref(), name);
    }

    /// All items `i` with `leq(start, i) && leq(i, end)` under `C`.
    /// Empty whenever `end` is strictly less than `start`. Subtrees
    /// that cannot intersect the bounds are never visited.
    pub fn range(&self, start: &Item, end: &Item) -> FxHashSet<Item> {
        let mut matching = FxHashSet::default();
        if C::less_than(end, start) {
            return matching;
        }
        Self::range_at(self.root.as_deref(), start, end, &mut matching);
        return matching;
    }

    fn range_at(link: Option<&Node>, start: &Item, end: &Item, matching: &mut FxHashSet<Item>) {
        let Some(node) = link else {
            return;
        };
        if !C::less_than(&node.value, start) {
            Self::range_at(node.left.as_deref(), start, end, matching);
        }
        if C::leq(start, &node.value) && C::leq(&node.value, end) {
            matching.insert(node.value.clone());
        }
        if !C::less_than(end, &node.value) {
            Self::range_at(node.right.as_deref(), start, end, matching);
        }
    }

    /// Lazy in-order traversal: items arrive comparator-sorted.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: SmallVec::new() };
        iter.push_left_spine(self.root.as_deref());
        return iter;
    }

    /// Lazy breadth-first traversal, one `Vec` of items per depth.
    pub fn levels(&self) -> Levels<'_> {
        return Levels {
            current: self.root.as_deref().into_iter().collect(),
        };
    }

    /// Restore balance at `node` after a structural change below it,
    /// then refresh its cached height.
    ///
    /// At most one single or one double rotation fixes any imbalance
    /// introduced by a single insert or erase step.
    fn rebalance(node: &mut Box<Node>) {
        if height(&node.left) - height(&node.right) > ALLOWED_IMBALANCE {
            let left = node.left.as_deref().expect("imbalance implies a left child");
            if height(&left.left) >= height(&left.right) {
                Self::rotate_with_left_child(node);
            } else {
                Self::double_with_left_child(node);
            }
        } else if height(&node.right) - height(&node.left) > ALLOWED_IMBALANCE {
            let right = node.right.as_deref().expect("imbalance implies a right child");
            if height(&right.right) >= height(&right.left) {
                Self::rotate_with_right_child(node);
            } else {
                Self::double_with_right_child(node);
            }
        }
        node.update_height();
    }

    /// Single right rotation: the left child becomes the subtree root.
    fn rotate_with_left_child(link: &mut Box<Node>) {
        let mut child = link.left.take().expect("rotation requires a left child");
        link.left = child.right.take();
        link.update_height();
        std::mem::swap(link, &mut child);
        // `link` now holds the promoted child; `child` holds the old root.
        link.right = Some(child);
        link.update_height();
    }

    /// Single left rotation: the right child becomes the subtree root.
    fn rotate_with_right_child(link: &mut Box<Node>) {
        let mut child = link.right.take().expect("rotation requires a right child");
        link.right = child.left.take();
        link.update_height();
        std::mem::swap(link, &mut child);
        link.left = Some(child);
        link.update_height();
    }

    /// Left-right imbalance: rotate the left child left, then this
    /// node right.
    fn double_with_left_child(link: &mut Box<Node>) {
        Self::rotate_with_right_child(link.left.as_mut().expect("double rotation requires a left child"));
        Self::rotate_with_left_child(link);
    }

    /// Right-left imbalance: rotate the right child right, then this
    /// node left.
    fn double_with_right_child(link: &mut Box<Node>) {
        Self::rotate_with_left_child(link.right.as_mut().expect("double rotation requires a right child"));
        Self::rotate_with_right_child(link);
    }
}

impl<C: Compare> Default for ItemAvl<C> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<C: Compare> Clone for ItemAvl<C> {
    fn clone(&self) -> Self {
        return ItemAvl {
            root: self.root.clone(),
            len: self.len,
            _compare: PhantomData,
        };
    }
}

impl<C: Compare> std::fmt::Debug for ItemAvl<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

/// Level-order rendering, one item name per line, with a blank line
/// separating depth levels.
impl<C: Compare> std::fmt::Display for ItemAvl<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for level in self.levels() {
            for item in level {
                writeln!(f, "{}", item)?;
            }
            writeln!(f)?;
        }
        return Ok(());
    }
}

/// Lazy in-order iterator. Holds the left spine of the unvisited part
/// of the tree; inline capacity covers any tree shorter than 16 levels
/// without touching the heap.
pub struct InOrder<'a> {
    stack: SmallVec<[&'a Node; 16]>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<&'a Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        return Some(&node.value);
    }
}

/// Lazy breadth-first iterator yielding one level at a time.
pub struct Levels<'a> {
    current: Vec<&'a Node>,
}

impl<'a> Iterator for Levels<'a> {
    type Item = Vec<&'a Item>;

    fn next(&mut self) -> Option<Vec<&'a Item>> {
        if self.current.is_empty() {
            return None;
        }
        let mut items = Vec::with_capacity(self.current.len());
        let mut next = Vec::new();
        for node in self.current.drain(..) {
            items.push(&node.value);
            if let Some(left) = node.left.as_deref() {
                next.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                next.push(right);
            }
        }
        self.current = next;
        return Some(items);
    }
}
