//! Fixed-grid item store.
//!
//! The simplest backend: a rows x cols grid of slots addressed by
//! position rather than by key. An empty slot holds a placeholder of
//! kind [`ItemKind::None`]; aggregate weight and count track the
//! non-placeholder slots and are computed once from the seed grid at
//! construction, then maintained incrementally.
//!
//! Out-of-bounds coordinates fail loudly with [`OutOfRange`] instead
//! of clamping. Silent clamping would hand back the wrong slot and
//! corrupt caller assumptions about where items live.

use crate::item::Item;
use crate::item::ItemKind;

/// Error for grid coordinates outside the backing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRange {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(
            f,
            "position ({}, {}) is outside the {}x{} grid",
            self.row, self.col, self.rows, self.cols
        );
    }
}

impl std::error::Error for OutOfRange {}

/// A positional item store over a fixed grid of slots.
#[derive(Clone, Debug)]
pub struct GridInventory {
    grid: Vec<Vec<Item>>,
    equipped: Option<Box<Item>>,
    weight: f32,
    count: usize,
}

impl GridInventory {
    /// Seed a store from a grid of slots and an optional equipped
    /// item. The equipped item is copied; the store never aliases
    /// caller-owned memory. Weight and count come from a single scan
    /// over the seed, skipping `ItemKind::None` placeholders.
    pub fn new(grid: Vec<Vec<Item>>, equipped: Option<&Item>) -> GridInventory {
        let mut weight = 0.0;
        let mut count = 0;
        for row in &grid {
            for item in row {
                if item.kind() != ItemKind::None {
                    weight += item.weight();
                    count += 1;
                }
            }
        }
        return GridInventory {
            grid,
            equipped: equipped.map(|item| Box::new(item.clone())),
            weight,
            count,
        };
    }

    /// The item at the given position.
    pub fn at(&self, row: usize, col: usize) -> Result<&Item, OutOfRange> {
        self.check_bounds(row, col)?;
        return Ok(&self.grid[row][col]);
    }

    /// Place an item into an empty slot. `Ok(false)` if the slot is
    /// occupied; on success the item's weight joins the running total.
    pub fn store(&mut self, row: usize, col: usize, pickup: Item) -> Result<bool, OutOfRange> {
        self.check_bounds(row, col)?;
        if self.grid[row][col].kind() != ItemKind::None {
            return Ok(false);
        }
        self.weight += pickup.weight();
        self.count += 1;
        self.grid[row][col] = pickup;
        return Ok(true);
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), OutOfRange> {
        if row >= self.grid.len() || col >= self.grid[row].len() {
            return Err(OutOfRange {
                row,
                col,
                rows: self.grid.len(),
                cols: self.grid.first().map_or(0, Vec::len),
            });
        }
        return Ok(());
    }

    /// Place an item in the equipped slot, copying it in. Any previous
    /// occupant is dropped.
    pub fn equip(&mut self, item: &Item) {
        self.equipped = Some(Box::new(item.clone()));
    }

    /// Drop the equipped item, if any.
    pub fn discard_equipped(&mut self) {
        self.equipped = None;
    }

    pub fn equipped(&self) -> Option<&Item> {
        return self.equipped.as_deref();
    }

    /// Total weight of non-placeholder slots, excluding the equipped
    /// slot.
    pub fn weight(&self) -> f32 {
        return self.weight;
    }

    /// Number of non-placeholder slots.
    pub fn count(&self) -> usize {
        return self.count;
    }

    /// A copy of the backing grid, for read-only inspection.
    pub fn items(&self) -> Vec<Vec<Item>> {
        return self.grid.clone();
    }
}

/// A 10x10 grid of empty slots and nothing equipped.
impl Default for GridInventory {
    fn default() -> Self {
        let grid = vec![vec![Item::empty(); 10]; 10];
        return GridInventory::new(grid, None);
    }
}
