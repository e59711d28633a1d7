//! Tests for grid limits and convenience sizes

#[cfg(test)]
mod tests {
    use board_grid::board::{Grid, GridMut, GridRead};
    use board_grid::common::configuration::{MAX_GRID_DIMENSION, STANDARD_BOARD_SIZE};

    // Tests maximum grid dimension value
    // Verified by reducing dimension limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert!(i32::try_from(MAX_GRID_DIMENSION).is_ok());
    }

    // Tests the limit itself is still accepted
    #[test]
    fn test_max_dimension_is_inclusive() {
        assert!(Grid::<u8>::empty(MAX_GRID_DIMENSION, 1).is_ok());
        assert!(Grid::<u8>::empty(1, MAX_GRID_DIMENSION + 1).is_err());
    }

    // Tests standard boards use the chess board size
    #[test]
    fn test_standard_board_size() {
        assert_eq!(STANDARD_BOARD_SIZE, 8);

        let board = Grid::<u8>::standard();
        assert_eq!((board.x_size(), board.y_size()), (8, 8));

        let handle = GridMut::<u8>::standard();
        assert_eq!(handle.count(), 0);
        assert_eq!(handle.x_size(), STANDARD_BOARD_SIZE);
    }
}
