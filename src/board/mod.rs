//! Board representation for hexagonal Reversi

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

use serde::{Deserialize, Serialize};

/// Smallest playable board dimension (boards are N x N with N odd).
pub const MIN_BOARD_SIZE: i32 = 5;

/// Disc colors, one per player. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// State of one playable cell.
///
/// Cells outside the hexagonal footprint hold no `Cell` at all; they are
/// board geometry, not game state, and surface only as `InvalidCoordinate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Face-down disc: playable, owned by nobody.
    Empty,
    /// Disc flipped to a player's color.
    Taken(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the disc, if any
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }
}

/// Position on the board: `x` is the column, `y` the row (growing downward).
///
/// Components are signed so direction shifts can step past the edge; the
/// `Board` decides what is actually addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
