//! Eight-way compass directions with fixed unit offsets

use std::fmt;
use std::str::FromStr;

use crate::common::error::{GridError, unknown_direction};
use crate::spatial::position::Pos;

/// One of the eight neighbouring steps on a grid
///
/// The offset table fixes the coordinate convention: `y` grows downward, so
/// `Up` is `(0, -1)`. Discriminants follow declaration order and are what
/// `TryFrom<u8>` decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// `(0, -1)`
    Up,
    /// `(0, 1)`
    Down,
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
    /// `(-1, -1)`
    UpLeft,
    /// `(1, -1)`
    UpRight,
    /// `(-1, 1)`
    DownLeft,
    /// `(1, 1)`
    DownRight,
}

impl Direction {
    /// Every direction in declaration order
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// The four orthogonal directions
    pub const ORTHOGONAL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The four diagonal directions
    pub const DIAGONAL: [Self; 4] = [
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// Unit offset of a single step in this direction
    pub const fn offset(self) -> Pos {
        let (x, y) = match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownLeft => (-1, 1),
            Self::DownRight => (1, 1),
        };
        Pos::from_xy(x, y)
    }

    /// The direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    /// Whether the step changes both coordinates
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight
        )
    }

    /// Canonical camelCase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "upLeft",
            Self::UpRight => "upRight",
            Self::DownLeft => "downLeft",
            Self::DownRight => "downRight",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| unknown_direction(&value))
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Accepts camelCase, `snake_case` and kebab-case names, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| unknown_direction(&s))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
