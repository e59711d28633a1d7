//! Fixed-size two-dimensional board grid for turn-based board games
//!
//! A grid stores one optional value per cell and tells an empty cell apart
//! from a position off the board, which lets move generators walk in any of
//! eight directions until they fall off the edge. Boards come in two
//! flavours over the same storage: [`Grid`] updates by copy-on-write and
//! [`GridMut`] updates in place.

#![forbid(unsafe_code)]

/// Grid storage, lookups and the immutable/mutable facades
pub mod board;
/// Error handling and configuration
pub mod common;
/// Coordinates, positions and directions
pub mod spatial;

pub use board::{Grid, GridCore, GridMut, GridRead, Lookup, ValueAndPos};
pub use common::error::{GridError, Result};
pub use spatial::{Direction, Pos, PosMut, X, Y};
