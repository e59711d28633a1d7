//! Grid storage and its two access modes
//!
//! This module contains the board itself:
//! - `GridCore`, the dense storage engine with lookup and search
//! - `Grid`, the immutable copy-on-write facade
//! - `GridMut`, the in-place facade with explicit aliasing
//! - The `GridRead` trait both facades implement

/// Immutable copy-on-write board
pub mod immutable;
/// Three-way lookup results and search hits
pub mod lookup;
/// Mutable board handle
pub mod mutable;
/// Read-only surface shared by both facades
pub mod readable;
/// Dense storage engine
pub mod storage;

pub use immutable::Grid;
pub use lookup::{Lookup, ValueAndPos};
pub use mutable::GridMut;
pub use readable::GridRead;
pub use storage::GridCore;
