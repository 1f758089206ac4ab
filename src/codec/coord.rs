//! Coordinates and moves on the 8x8 board.

use serde::{Deserialize, Serialize};

/// A board coordinate in `(horizon, axis)` form. `horizon` counts rows from
/// light's back rank upward; `axis` is the column, left to right. Both are
/// `0..=7`; out-of-range values cannot be constructed through `new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub horizon: u8,
    pub axis: u8,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(horizon: u8, axis: u8) -> Coord {
        Coord { horizon, axis }
    }

    /// Construct from signed offsets, returning `None` if either falls
    /// outside `0..=7`.
    #[inline]
    #[must_use]
    pub fn from_offsets(horizon: i8, axis: i8) -> Option<Coord> {
        if (0..8).contains(&horizon) && (0..8).contains(&axis) {
            Some(Coord::new(horizon as u8, axis as u8))
        } else {
            None
        }
    }

    /// The matrix row this coordinate maps to: `7 - horizon`.
    #[inline]
    #[must_use]
    pub const fn matrix_row(self) -> usize {
        7 - self.horizon as usize
    }

    #[inline]
    #[must_use]
    pub const fn matrix_col(self) -> usize {
        self.axis as usize
    }

    /// Pack to the single-byte wire form: high nibble horizon, low nibble axis.
    #[inline]
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        (self.horizon << 4) | self.axis
    }

    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Coord {
        Coord::new(byte >> 4, byte & 0x0F)
    }
}

/// An ordered `(source, destination)` pair. No special-case payload: the
/// successor board is always built by voiding `from` and writing the moved
/// piece into `to`, overwriting whatever was there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Move {
        Move { from, to }
    }
}
