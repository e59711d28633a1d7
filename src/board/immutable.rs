//! Immutable two-dimensional board
//!
//! `Grid` owns its storage exclusively. Writes copy the storage, change the
//! copy and wrap it in a new `Grid`, so a value obtained earlier never
//! changes underneath its holder.

use tracing::trace;

use crate::board::mutable::GridMut;
use crate::board::readable::GridRead;
use crate::board::storage::GridCore;
use crate::common::configuration::STANDARD_BOARD_SIZE;
use crate::common::error::Result;
use crate::spatial::coordinate::{X, Y};
use crate::spatial::position::Pos;

/// Two-dimensional board with copy-on-write updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    core: GridCore<T>,
}

impl<T> Grid<T> {
    /// Empty `x_size` by `y_size` board
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either axis exceeds `MAX_GRID_DIMENSION`
    pub fn empty(x_size: usize, y_size: usize) -> Result<Self> {
        GridCore::new(x_size, y_size).map(Self::from)
    }

    /// Empty 8x8 board
    pub fn standard() -> Self {
        Self::from(GridCore::allocate(STANDARD_BOARD_SIZE, STANDARD_BOARD_SIZE))
    }

    /// Borrow the underlying storage
    pub const fn core(&self) -> &GridCore<T> {
        &self.core
    }

    /// New board with `value` placed at `pos`; `self` is left untouched
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` if `pos` is outside the board
    pub fn put(&self, pos: Pos, value: impl Into<Option<T>>) -> Result<Self>
    where
        T: Clone,
    {
        self.core.pos_to_index(pos)?;
        let mut core = self.core.copy();
        core.set(pos, value.into())?;
        Ok(Self { core })
    }

    /// New board with `value` placed at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` if `(x, y)` is outside the board
    pub fn put_at(&self, x: X, y: Y, value: impl Into<Option<T>>) -> Result<Self>
    where
        T: Clone,
    {
        self.put(Pos::new(x, y), value)
    }

    /// New board with the cell at `pos` emptied
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` if `pos` is outside the board
    pub fn remove(&self, pos: Pos) -> Result<Self>
    where
        T: Clone,
    {
        self.put(pos, None)
    }

    /// Independent duplicate
    #[must_use]
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            core: self.core.copy(),
        }
    }

    /// Mutable handle over this board's storage without copying
    ///
    /// This is the fast path out of immutability. The board is consumed, so
    /// no immutable reader can observe mutations made through the returned
    /// handle. Call `copy` first to keep an immutable snapshot alongside it.
    pub fn into_mutable(self) -> GridMut<T> {
        trace!(
            x_size = self.core.x_size(),
            y_size = self.core.y_size(),
            "converting grid to mutable without copy"
        );
        GridMut::from(self.core)
    }
}

/// Wraps storage without a defensive copy; ownership guarantees no aliasing
impl<T> From<GridCore<T>> for Grid<T> {
    fn from(core: GridCore<T>) -> Self {
        Self { core }
    }
}

impl<T> GridRead<T> for Grid<T> {
    fn with_core<R>(&self, read: impl FnOnce(&GridCore<T>) -> R) -> R {
        read(&self.core)
    }
}
