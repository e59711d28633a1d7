//! Mutable two-dimensional board handle
//!
//! `GridMut` writes in place through storage that may be shared with other
//! handles. Aliasing only ever happens through `share`; conversions to and
//! from `Grid` move the storage instead of sharing it.

use std::cell::{Ref, RefCell};
use std::mem;
use std::rc::Rc;

use tracing::trace;

use crate::board::immutable::Grid;
use crate::board::readable::GridRead;
use crate::board::storage::GridCore;
use crate::common::configuration::STANDARD_BOARD_SIZE;
use crate::common::error::Result;
use crate::spatial::coordinate::{X, Y};
use crate::spatial::position::Pos;

/// Two-dimensional board with in-place updates
///
/// Use `Grid` unless update throughput or memory matters. The handle is not
/// `Clone`: a second handle to the same cells is made explicitly with
/// `share`, and writes through either are visible through both.
#[derive(Debug)]
pub struct GridMut<T> {
    core: Rc<RefCell<GridCore<T>>>,
}

impl<T> GridMut<T> {
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

    /// Place `value` at `pos` in place, returning the same handle for chaining
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` if `pos` is outside the board, or
    /// `StorageBusy` if called while the storage is being read, e.g. from a
    /// `for_each` callback on an alias of this board
    pub fn put(&self, pos: Pos, value: impl Into<Option<T>>) -> Result<&Self> {
        let value = value.into();
        let previous = self.core.try_borrow_mut()?.set(pos, value)?;
        // Displaced value is dropped with the borrow already released
        drop(previous);
        Ok(self)
    }

    /// Place `value` at `(x, y)` in place
    ///
    /// # Errors
    ///
    /// Same as [`GridMut::put`]
    pub fn put_at(&self, x: X, y: Y, value: impl Into<Option<T>>) -> Result<&Self> {
        self.put(Pos::new(x, y), value)
    }

    /// Empty the cell at `pos`, returning what it held
    ///
    /// # Errors
    ///
    /// Same as [`GridMut::put`]
    pub fn take(&self, pos: Pos) -> Result<Option<T>> {
        let previous = self.core.try_borrow_mut()?.set(pos, None)?;
        Ok(previous)
    }

    /// Empty every cell
    ///
    /// # Errors
    ///
    /// Returns `StorageBusy` if the storage is currently being read
    pub fn clear(&self) -> Result<&Self> {
        let cleared = {
            let mut core = self.core.try_borrow_mut()?;
            let empty = GridCore::allocate(core.x_size(), core.y_size());
            mem::replace(&mut *core, empty)
        };
        drop(cleared);
        Ok(self)
    }

    /// Borrow the storage for direct reads without cloning values
    ///
    /// Writes through any alias fail with `StorageBusy` while the guard lives.
    pub fn read(&self) -> Ref<'_, GridCore<T>> {
        self.core.borrow()
    }

    /// Another handle onto the same storage
    #[must_use]
    pub fn share(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }

    /// Whether both handles write to the same storage
    pub fn is_shared_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }

    /// Number of live handles onto this storage, this one included
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.core)
    }

    /// Independent immutable snapshot; later writes here are not observed
    pub fn copy(&self) -> Grid<T>
    where
        T: Clone,
    {
        Grid::from(self.core.borrow().copy())
    }

    /// Immutable board over this handle's storage
    ///
    /// Zero-copy when this is the only handle. If aliases made with `share`
    /// are still alive the storage is copied instead, so the returned board
    /// never observes writes made through them.
    pub fn into_immutable(self) -> Grid<T>
    where
        T: Clone,
    {
        match Rc::try_unwrap(self.core) {
            Ok(cell) => {
                trace!("converting grid to immutable without copy");
                Grid::from(cell.into_inner())
            }
            Err(shared) => {
                trace!(
                    handles = Rc::strong_count(&shared),
                    "grid storage still shared, copying for immutable snapshot"
                );
                let core = shared.borrow().copy();
                Grid::from(core)
            }
        }
    }
}

/// Wraps storage without a defensive copy; the core is moved in
impl<T> From<GridCore<T>> for GridMut<T> {
    fn from(core: GridCore<T>) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
        }
    }
}

impl<T> GridRead<T> for GridMut<T> {
    fn with_core<R>(&self, read: impl FnOnce(&GridCore<T>) -> R) -> R {
        read(&self.core.borrow())
    }
}
