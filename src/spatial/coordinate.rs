//! Axis-tagged coordinate scalars
//!
//! `X` and `Y` wrap a plain `i32` so that a column can never be passed where a
//! row is expected. Arithmetic with a raw `i32` of the same axis is permitted,
//! mixing the two axes is not. Arithmetic saturates at the `i32` limits; a
//! saturated coordinate lies outside every board.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::ToPrimitive;

macro_rules! coordinate_axis {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub i32);

        impl $name {
            /// Raw coordinate value
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0.saturating_add(rhs.0))
            }
        }

        impl Add<i32> for $name {
            type Output = Self;

            fn add(self, rhs: i32) -> Self {
                Self(self.0.saturating_add(rhs))
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0.saturating_sub(rhs.0))
            }
        }

        impl Sub<i32> for $name {
            type Output = Self;

            fn sub(self, rhs: i32) -> Self {
                Self(self.0.saturating_sub(rhs))
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl AddAssign<i32> for $name {
            fn add_assign(&mut self, rhs: i32) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl SubAssign<i32> for $name {
            fn sub_assign(&mut self, rhs: i32) {
                *self = *self - rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self(self.0.saturating_neg())
            }
        }

        // Negative coordinates yield `None` from `to_usize`, which is how the
        // grid rejects them when converting to a cell index
        impl ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                self.0.to_i64()
            }

            fn to_u64(&self) -> Option<u64> {
                self.0.to_u64()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

coordinate_axis!(
    /// Column coordinate, increasing to the right
    X
);

coordinate_axis!(
    /// Row coordinate, increasing downward
    Y
);
