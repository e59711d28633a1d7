//! Dense grid storage shared by the immutable and mutable facades
//!
//! Cells live in a single `Array2<Option<T>>` indexed `[[y, x]]`, so the
//! array's logical order is the row-major order every scan uses: `y` outer,
//! `x` inner, both ascending. The storage shape never changes after
//! construction, and `copy` is the only operation that produces independent
//! storage.

use ndarray::Array2;
use num_traits::ToPrimitive;
use tracing::trace;

use crate::board::lookup::{Lookup, ValueAndPos};
use crate::common::configuration::MAX_GRID_DIMENSION;
use crate::common::error::{GridError, Result, position_out_of_range};
use crate::spatial::coordinate::{X, Y};
use crate::spatial::direction::Direction;
use crate::spatial::position::Pos;

/// Fixed-size rectangular storage of optional cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCore<T> {
    cells: Array2<Option<T>>,
}

impl<T> GridCore<T> {
    /// Create an `x_size` by `y_size` grid with every cell empty
    ///
    /// Zero-sized axes are allowed and produce a grid where every lookup is
    /// out of bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either axis exceeds `MAX_GRID_DIMENSION`
    pub fn new(x_size: usize, y_size: usize) -> Result<Self> {
        if x_size > MAX_GRID_DIMENSION || y_size > MAX_GRID_DIMENSION {
            return Err(GridError::InvalidDimensions {
                x_size,
                y_size,
                reason: "axis exceeds the maximum grid dimension",
            });
        }
        Ok(Self::allocate(x_size, y_size))
    }

    /// Allocate without validating; callers guarantee the dimensions are in range
    pub(crate) fn allocate(x_size: usize, y_size: usize) -> Self {
        trace!(x_size, y_size, "allocating grid storage");
        Self {
            cells: Array2::from_shape_simple_fn((y_size, x_size), || None),
        }
    }

    /// Number of columns
    pub fn x_size(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn y_size(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Array index for in-bounds coordinates
    fn cell_index(&self, x: X, y: Y) -> Option<(usize, usize)> {
        let col = x.to_usize().filter(|&col| col < self.x_size())?;
        let row = y.to_usize().filter(|&row| row < self.y_size())?;
        Some((row, col))
    }

    /// Read the cell at `pos`
    pub fn value(&self, pos: Pos) -> Lookup<&T> {
        self.value_at(pos.x(), pos.y())
    }

    /// Read the cell at `(x, y)`
    pub fn value_at(&self, x: X, y: Y) -> Lookup<&T> {
        Lookup::from(self.cell_index(x, y).and_then(|index| self.cells.get(index)))
    }

    /// Whether `pos` is on the grid and holds a value
    pub fn exists(&self, pos: Pos) -> bool {
        self.value(pos).is_occupied()
    }

    /// Row-major iterator over every cell, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Option<&T>)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (Pos::from_xy(col as i32, row as i32), cell.as_ref()))
    }

    /// Visit every cell in row-major order
    pub fn for_each(&self, mut visit: impl FnMut(Pos, Option<&T>)) {
        for (pos, value) in self.iter() {
            visit(pos, value);
        }
    }

    /// Whether any cell passes `check`, stopping at the first that does
    pub fn some(&self, mut check: impl FnMut(Pos, Option<&T>) -> bool) -> bool {
        self.iter().any(|(pos, value)| check(pos, value))
    }

    /// First cell in row-major order that passes `check`
    pub fn find(
        &self,
        mut check: impl FnMut(Pos, Option<&T>) -> bool,
    ) -> Option<ValueAndPos<&T>> {
        self.iter()
            .find(|&(pos, value)| check(pos, value))
            .map(|(pos, value)| ValueAndPos::new(pos, value))
    }

    /// Every cell that passes `check`, in row-major order
    pub fn find_all(
        &self,
        mut check: impl FnMut(Pos, Option<&T>) -> bool,
    ) -> Vec<ValueAndPos<&T>> {
        self.iter()
            .filter(|&(pos, value)| check(pos, value))
            .map(|(pos, value)| ValueAndPos::new(pos, value))
            .collect()
    }

    /// Cell one step from `pos` in `direction`
    ///
    /// Returns `None` when the step leaves the grid. An empty neighbour is
    /// `Some` with a `None` value.
    pub fn value_with_direction(&self, pos: Pos, direction: Direction) -> Option<ValueAndPos<&T>> {
        let target = pos.step(direction);
        self.value(target)
            .into_option()
            .map(|value| ValueAndPos::new(target, value))
    }

    /// Every cell from `pos` outward in `direction` until the grid edge
    ///
    /// The starting cell is not included. Sliding pieces typically
    /// `take_while` the cells are empty and then inspect the next one.
    pub fn walk(
        &self,
        pos: Pos,
        direction: Direction,
    ) -> impl Iterator<Item = ValueAndPos<&T>> + '_ {
        std::iter::successors(self.value_with_direction(pos, direction), move |previous| {
            self.value_with_direction(previous.pos, direction)
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Position of the row-major linear `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= x_size * y_size`
    pub fn index_to_pos(&self, index: usize) -> Result<Pos> {
        let len = self.len();
        if index >= len {
            return Err(GridError::IndexOutOfRange { index, len });
        }
        let x_size = self.x_size();
        Ok(Pos::from_xy((index % x_size) as i32, (index / x_size) as i32))
    }

    /// Row-major linear index of `pos`, `y * x_size + x`
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` if `pos` is outside the grid rectangle
    pub fn pos_to_index(&self, pos: Pos) -> Result<usize> {
        self.cell_index(pos.x(), pos.y())
            .map(|(row, col)| row * self.x_size() + col)
            .ok_or_else(|| position_out_of_range(pos, self.x_size(), self.y_size()))
    }

    /// Replace the cell at `pos`, returning its previous content
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` if `pos` is outside the grid rectangle
    pub fn set(&mut self, pos: Pos, value: Option<T>) -> Result<Option<T>> {
        let (x_size, y_size) = (self.x_size(), self.y_size());
        let cell = self
            .cell_index(pos.x(), pos.y())
            .and_then(|index| self.cells.get_mut(index))
            .ok_or_else(|| position_out_of_range(pos, x_size, y_size))?;
        Ok(std::mem::replace(cell, value))
    }

    /// Clear every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.map_inplace(|cell| *cell = None);
    }

    /// Independent grid with the same dimensions and cloned cell values
    ///
    /// Only the grid structure is duplicated; values are cloned with their own
    /// `Clone` semantics, so `Rc` payloads stay shared.
    #[must_use]
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        trace!(
            x_size = self.x_size(),
            y_size = self.y_size(),
            "deep-copying grid storage"
        );
        Self {
            cells: self.cells.clone(),
        }
    }

    /// Independent copy of the raw `[[y, x]]` storage
    pub fn values(&self) -> Array2<Option<T>>
    where
        T: Clone,
    {
        self.cells.clone()
    }
}
