//! Tests for axis-tagged coordinate arithmetic and index conversion

#[cfg(test)]
mod tests {
    use board_grid::spatial::coordinate::{X, Y};
    use num_traits::ToPrimitive;

    // Tests same-axis arithmetic with both coordinates and raw integers
    // Verified by swapping the operands of Sub
    #[test]
    fn test_same_axis_arithmetic() {
        assert_eq!(X(3) + X(4), X(7));
        assert_eq!(X(3) + 2, X(5));
        assert_eq!(Y(3) - Y(5), Y(-2));
        assert_eq!(Y(3) - 1, Y(2));
        assert_eq!(-X(4), X(-4));
    }

    // Tests compound assignment operators mutate in place
    #[test]
    fn test_compound_assignment() {
        let mut x = X(1);
        x += X(2);
        x += 3;
        x -= X(1);
        x -= 1;
        assert_eq!(x, X(4));

        let mut y = Y(0);
        y -= 1;
        assert_eq!(y.get(), -1);
    }

    // Tests arithmetic clamps at the i32 limits instead of overflowing
    // Verified by reverting Add and SubAssign to plain integer operators
    #[test]
    fn test_arithmetic_saturates_at_limits() {
        assert_eq!(X(i32::MAX) + 1, X(i32::MAX));
        assert_eq!(X(i32::MAX) + X(i32::MAX), X(i32::MAX));
        assert_eq!(Y(i32::MIN) - 1, Y(i32::MIN));
        assert_eq!(Y(i32::MIN) - Y(1), Y(i32::MIN));
        assert_eq!(-X(i32::MIN), X(i32::MAX));

        let mut y = Y(i32::MIN);
        y -= 1;
        y += Y(-1);
        assert_eq!(y, Y(i32::MIN));
    }

    // Tests negative coordinates have no index form
    // Verified by casting with `as usize` instead of ToPrimitive
    #[test]
    fn test_to_usize_rejects_negative() {
        assert_eq!(X(5).to_usize(), Some(5));
        assert_eq!(Y(0).to_usize(), Some(0));
        assert_eq!(X(-1).to_usize(), None);
        assert_eq!(Y(i32::MIN).to_usize(), None);
    }

    // Tests raw conversions and display
    #[test]
    fn test_conversions_and_display() {
        let x: X = 7.into();
        let raw: i32 = Y(-3).into();
        assert_eq!(x, X(7));
        assert_eq!(raw, -3);
        assert_eq!(X(12).to_string(), "12");
        assert!(X(1) < X(2));
    }
}
