//! Tests for error formatting and error sources

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::error::Error;

    use board_grid::GridError;
    use board_grid::common::error::{position_out_of_range, unknown_direction};
    use board_grid::spatial::Pos;

    // Tests each variant renders its context
    // Verified by dropping the position from the PositionOutOfRange message
    #[test]
    fn test_display_messages() {
        let index = GridError::IndexOutOfRange { index: 64, len: 64 };
        assert_eq!(
            index.to_string(),
            "Index 64 is out of range (grid has 64 cells)"
        );

        let pos = position_out_of_range(Pos::from_xy(8, -1), 8, 8);
        assert_eq!(
            pos.to_string(),
            "Position (8, -1) is outside the grid (size 8x8)"
        );

        let direction = unknown_direction(&"north");
        assert_eq!(direction.to_string(), "Unknown direction 'north'");

        let dimensions = GridError::InvalidDimensions {
            x_size: 20_000,
            y_size: 1,
            reason: "too wide",
        };
        assert_eq!(
            dimensions.to_string(),
            "Invalid grid dimensions 20000x1: too wide"
        );
    }

    // Tests only the borrow failure carries an underlying source
    #[test]
    fn test_error_sources() {
        let cell = RefCell::new(0_u8);
        let guard = cell.borrow();
        let busy = match cell.try_borrow_mut() {
            Ok(_) => None,
            Err(source) => Some(GridError::from(source)),
        };
        drop(guard);

        assert!(matches!(busy, Some(GridError::StorageBusy { .. })));
        assert!(busy.as_ref().and_then(|error| error.source()).is_some());
        assert!(
            position_out_of_range(Pos::ORIGIN, 0, 0)
                .source()
                .is_none()
        );
    }
}
