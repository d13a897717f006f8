//! The six hex-adjacency directions in the offset layout
//!
//! Rows are offset: a diagonal step changes column differently depending on
//! whether the starting row is even or odd, so the shift table is keyed on
//! row parity. Horizontal steps are parity-independent.

use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// One of the six hex neighbors of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All six directions, in the fixed order capture scans evaluate them.
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Step one cell in this direction.
    ///
    /// Pure function; may produce an off-board coordinate, which the board's
    /// bounds check rejects.
    #[inline]
    pub fn shift(self, from: Coord) -> Coord {
        let odd_row = from.y.rem_euclid(2) == 1;
        let (dx, dy) = match (self, odd_row) {
            (Direction::Left, _) => (-1, 0),
            (Direction::Right, _) => (1, 0),
            (Direction::UpLeft, false) => (-1, -1),
            (Direction::UpLeft, true) => (0, -1),
            (Direction::UpRight, false) => (0, -1),
            (Direction::UpRight, true) => (1, -1),
            (Direction::DownLeft, false) => (-1, 1),
            (Direction::DownLeft, true) => (0, 1),
            (Direction::DownRight, false) => (0, 1),
            (Direction::DownRight, true) => (1, 1),
        };
        Coord::new(from.x + dx, from.y + dy)
    }
}
