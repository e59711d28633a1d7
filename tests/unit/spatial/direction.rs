//! Tests for the eight-way direction table and direction decoding

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use board_grid::GridError;
    use board_grid::spatial::{Direction, Pos};

    // Tests every direction maps to its documented unit offset with y growing downward
    // Verified by flipping the sign of the Up offset
    #[test]
    fn test_offset_table() {
        let expected = [
            (Direction::Up, (0, -1)),
            (Direction::Down, (0, 1)),
            (Direction::Right, (1, 0)),
            (Direction::Left, (-1, 0)),
            (Direction::UpRight, (1, -1)),
            (Direction::UpLeft, (-1, -1)),
            (Direction::DownRight, (1, 1)),
            (Direction::DownLeft, (-1, 1)),
        ];

        for (direction, offset) in expected {
            assert_eq!(direction.offset(), Pos::from(offset), "{direction}");
        }
    }

    // Tests the table is total and every offset is a distinct unit step
    #[test]
    fn test_offsets_are_distinct_unit_steps() {
        let offsets: HashSet<Pos> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&Pos::ORIGIN));

        for offset in offsets {
            assert!(offset.x().get().abs() <= 1);
            assert!(offset.y().get().abs() <= 1);
        }
    }

    // Tests opposite directions cancel out
    // Verified by mapping UpLeft to DownLeft
    #[test]
    fn test_opposite_cancels_offset() {
        for direction in Direction::ALL {
            let there_and_back = Pos::ORIGIN.step(direction).step(direction.opposite());
            assert_eq!(there_and_back, Pos::ORIGIN);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    // Tests diagonal classification matches the two groups
    #[test]
    fn test_diagonal_groups() {
        assert!(Direction::DIAGONAL.iter().all(|d| d.is_diagonal()));
        assert!(Direction::ORTHOGONAL.iter().all(|d| !d.is_diagonal()));
    }

    // Tests raw discriminants decode in declaration order and reject the rest
    // Verified by allowing index 8 to wrap around
    #[test]
    fn test_try_from_u8() {
        for (raw, direction) in (0u8..).zip(Direction::ALL) {
            assert!(matches!(Direction::try_from(raw), Ok(d) if d == direction));
            assert_eq!(direction as u8, raw);
        }

        let result = Direction::try_from(8);
        assert!(matches!(
            result,
            Err(GridError::UnknownDirection { ref value }) if value == "8"
        ));
    }

    // Tests names parse in camelCase, snake_case and kebab-case
    #[test]
    fn test_from_str() -> Result<(), GridError> {
        assert_eq!("up".parse::<Direction>()?, Direction::Up);
        assert_eq!("upLeft".parse::<Direction>()?, Direction::UpLeft);
        assert_eq!("down_right".parse::<Direction>()?, Direction::DownRight);
        assert_eq!("Down-Left".parse::<Direction>()?, Direction::DownLeft);

        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>()?, direction);
        }

        assert!(matches!(
            "north".parse::<Direction>(),
            Err(GridError::UnknownDirection { .. })
        ));
        Ok(())
    }
}
