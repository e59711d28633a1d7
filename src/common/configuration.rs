//! Grid limits and convenience sizes

// Keeps every in-bounds coordinate representable as i32
/// Maximum allowed grid dimension on either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Side length of a standard chess or checkers board
pub const STANDARD_BOARD_SIZE: usize = 8;
