//! Read-only surface shared by `Grid` and `GridMut`
//!
//! Both facades expose the same lookups; they differ only in how they reach
//! their `GridCore`. Values leave through clones so that `GridMut` can serve
//! them without holding a borrow of its shared storage.

use ndarray::Array2;

use crate::board::lookup::{Lookup, ValueAndPos};
use crate::board::storage::GridCore;
use crate::common::error::Result;
use crate::spatial::coordinate::{X, Y};
use crate::spatial::direction::Direction;
use crate::spatial::position::Pos;

/// Readable two-dimensional board
pub trait GridRead<T> {
    /// Run `read` against the underlying storage
    fn with_core<R>(&self, read: impl FnOnce(&GridCore<T>) -> R) -> R;

    /// Number of columns
    fn x_size(&self) -> usize {
        self.with_core(GridCore::x_size)
    }

    /// Number of rows
    fn y_size(&self) -> usize {
        self.with_core(GridCore::y_size)
    }

    /// Value at `pos`: occupied, empty, or outside the board
    fn value(&self, pos: Pos) -> Lookup<T>
    where
        T: Clone,
    {
        self.with_core(|core| core.value(pos).cloned())
    }

    /// Value at `(x, y)`: occupied, empty, or outside the board
    fn value_at(&self, x: X, y: Y) -> Lookup<T>
    where
        T: Clone,
    {
        self.with_core(|core| core.value_at(x, y).cloned())
    }

    /// Whether there is a value at `pos`; false for empty and off-board
    fn exists(&self, pos: Pos) -> bool {
        self.with_core(|core| core.exists(pos))
    }

    /// Visit every cell in row-major order, empty ones included
    fn for_each(&self, visit: impl FnMut(Pos, Option<&T>)) {
        self.with_core(|core| core.for_each(visit));
    }

    /// Whether at least one cell passes `check`
    fn some(&self, check: impl FnMut(Pos, Option<&T>) -> bool) -> bool {
        self.with_core(|core| core.some(check))
    }

    /// First cell in row-major order that passes `check`
    fn find(&self, check: impl FnMut(Pos, Option<&T>) -> bool) -> Option<ValueAndPos<T>>
    where
        T: Clone,
    {
        self.with_core(|core| core.find(check).map(|hit| hit.cloned()))
    }

    /// Every cell that passes `check`, in row-major order
    fn find_all(&self, check: impl FnMut(Pos, Option<&T>) -> bool) -> Vec<ValueAndPos<T>>
    where
        T: Clone,
    {
        self.with_core(|core| {
            core.find_all(check)
                .into_iter()
                .map(|hit| hit.cloned())
                .collect()
        })
    }

    /// Cell one step ahead of `pos` in `direction`, `None` past the edge
    fn value_with_direction(&self, pos: Pos, direction: Direction) -> Option<ValueAndPos<T>>
    where
        T: Clone,
    {
        self.with_core(|core| {
            core.value_with_direction(pos, direction)
                .map(|hit| hit.cloned())
        })
    }

    /// Every cell outward from `pos` in `direction` up to the edge
    fn walk(&self, pos: Pos, direction: Direction) -> Vec<ValueAndPos<T>>
    where
        T: Clone,
    {
        self.with_core(|core| core.walk(pos, direction).map(|hit| hit.cloned()).collect())
    }

    /// Number of occupied cells
    fn count(&self) -> usize {
        self.with_core(GridCore::count)
    }

    /// Position of a row-major linear index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not below `x_size * y_size`
    fn index_to_pos(&self, index: usize) -> Result<Pos> {
        self.with_core(|core| core.index_to_pos(index))
    }

    /// Row-major linear index of a position
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` if `pos` is outside the grid
    fn pos_to_index(&self, pos: Pos) -> Result<usize> {
        self.with_core(|core| core.pos_to_index(pos))
    }

    /// Raw `[[y, x]]` storage as an independent copy
    ///
    /// Mutating the returned array never affects the grid.
    fn values(&self) -> Array2<Option<T>>
    where
        T: Clone,
    {
        self.with_core(GridCore::values)
    }
}
