//! Board positions and translation arithmetic
//!
//! Positions carry no knowledge of any grid. They may be negative or lie far
//! outside a board; bounds are only checked when a position is used to index
//! a grid.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::spatial::coordinate::{X, Y};
use crate::spatial::direction::Direction;

/// Position on the board (immutable value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    x: X,
    y: Y,
}

impl Pos {
    /// The origin, top-left corner of every grid
    pub const ORIGIN: Self = Self::from_xy(0, 0);

    /// Create from axis-tagged coordinates
    pub const fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    /// Create from raw coordinates
    pub const fn from_xy(x: i32, y: i32) -> Self {
        Self { x: X(x), y: Y(y) }
    }

    /// Unit offset of one step in `direction`
    pub const fn from_direction(direction: Direction) -> Self {
        direction.offset()
    }

    /// Column
    pub const fn x(self) -> X {
        self.x
    }

    /// Row
    pub const fn y(self) -> Y {
        self.y
    }

    /// Position translated by `other`
    #[must_use]
    pub const fn translate(self, other: Self) -> Self {
        self.translate_xy(other.x, other.y)
    }

    /// Position translated by the given coordinate deltas
    ///
    /// Each axis saturates at the `i32` limits instead of overflowing.
    #[must_use]
    pub const fn translate_xy(self, x: X, y: Y) -> Self {
        Self::from_xy(self.x.0.saturating_add(x.0), self.y.0.saturating_add(y.0))
    }

    /// Position one step away in `direction`
    ///
    /// If you are currently at `(0, 0)`:
    /// up is `(0, -1)`, down is `(0, 1)`, right is `(1, 0)`, left is `(-1, 0)`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        self.translate(direction.offset())
    }
}

impl Add for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.translate(rhs)
    }
}

impl Add<Direction> for Pos {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self {
        self.step(rhs)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::from_xy(x, y)
    }
}

impl From<(X, Y)> for Pos {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

impl From<PosMut> for Pos {
    fn from(pos: PosMut) -> Self {
        pos.to_pos()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position on the board (mutable)
///
/// `Pos` is recommended; this variant translates in place and returns itself
/// for chaining, which avoids rebinding in tight walking loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PosMut {
    /// Column
    pub x: X,
    /// Row
    pub y: Y,
}

impl PosMut {
    /// Create from axis-tagged coordinates
    pub const fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    /// Translate in place by `other`
    pub fn translate(&mut self, other: Pos) -> &mut Self {
        self.translate_xy(other.x(), other.y())
    }

    /// Translate in place by the given coordinate deltas
    pub fn translate_xy(&mut self, x: X, y: Y) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    /// Move one step in `direction`
    pub fn step(&mut self, direction: Direction) -> &mut Self {
        self.translate(direction.offset())
    }

    /// Immutable snapshot of the current position
    pub const fn to_pos(self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

impl AddAssign<Pos> for PosMut {
    fn add_assign(&mut self, rhs: Pos) {
        self.translate(rhs);
    }
}

impl AddAssign<Direction> for PosMut {
    fn add_assign(&mut self, rhs: Direction) {
        self.step(rhs);
    }
}

impl From<Pos> for PosMut {
    fn from(pos: Pos) -> Self {
        Self::new(pos.x(), pos.y())
    }
}
