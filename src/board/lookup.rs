//! Three-way lookup results and search hits

use crate::spatial::position::Pos;

/// Result of reading one cell
///
/// Separates an empty cell from a position that lies outside the grid.
/// Direction walks rely on `OutOfBounds` to find the board edge without a
/// separate bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup<T> {
    /// The position is outside `[0, x_size) x [0, y_size)`
    OutOfBounds,
    /// The position is on the grid but holds no value
    Empty,
    /// The position holds a value
    Occupied(T),
}

impl<T> Lookup<T> {
    /// Whether the position fell outside the grid
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds)
    }

    /// Whether the position is on the grid but empty
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the position holds a value
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// Whether the position is on the grid, empty or not
    pub const fn is_in_bounds(&self) -> bool {
        !self.is_out_of_bounds()
    }

    /// The stored value, collapsing empty and out-of-bounds to `None`
    pub fn value(self) -> Option<T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Empty | Self::OutOfBounds => None,
        }
    }

    /// Nested form: outer `None` is out-of-bounds, inner `None` is empty
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::OutOfBounds => None,
            Self::Empty => Some(None),
            Self::Occupied(value) => Some(Some(value)),
        }
    }

    /// Borrow the contained value
    pub const fn as_ref(&self) -> Lookup<&T> {
        match self {
            Self::OutOfBounds => Lookup::OutOfBounds,
            Self::Empty => Lookup::Empty,
            Self::Occupied(value) => Lookup::Occupied(value),
        }
    }

    /// Transform the contained value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::OutOfBounds => Lookup::OutOfBounds,
            Self::Empty => Lookup::Empty,
            Self::Occupied(value) => Lookup::Occupied(f(value)),
        }
    }
}

impl<T> Lookup<&T> {
    /// Clone the referenced value out
    pub fn cloned(self) -> Lookup<T>
    where
        T: Clone,
    {
        self.map(Clone::clone)
    }
}

impl<'a, T> From<Option<&'a Option<T>>> for Lookup<&'a T> {
    /// Outer `None` means the cell does not exist
    fn from(cell: Option<&'a Option<T>>) -> Self {
        match cell {
            None => Self::OutOfBounds,
            Some(None) => Self::Empty,
            Some(Some(value)) => Self::Occupied(value),
        }
    }
}

/// A resolved position paired with the value found there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueAndPos<T> {
    /// Position of the cell
    pub pos: Pos,
    /// Cell content, `None` when empty
    pub value: Option<T>,
}

impl<T> ValueAndPos<T> {
    /// Pair a position with a cell value
    pub const fn new(pos: Pos, value: Option<T>) -> Self {
        Self { pos, value }
    }
}

impl<T> ValueAndPos<&T> {
    /// Clone the referenced value out
    pub fn cloned(self) -> ValueAndPos<T>
    where
        T: Clone,
    {
        ValueAndPos {
            pos: self.pos,
            value: self.value.cloned(),
        }
    }
}
