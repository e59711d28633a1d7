//! Coordinates, positions and directions
//!
//! This module contains the position arithmetic the grid depends on:
//! - Axis-tagged `X`/`Y` coordinate scalars
//! - Immutable `Pos` and in-place `PosMut` positions
//! - The eight-way `Direction` enumeration and its unit offsets

/// Axis-tagged coordinate scalars
pub mod coordinate;
/// Eight-way directions and their unit offsets
pub mod direction;
/// Immutable and mutable board positions
pub mod position;

pub use coordinate::{X, Y};
pub use direction::Direction;
pub use position::{Pos, PosMut};
