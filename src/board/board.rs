//! Board storage with the hexagonal playable footprint

use serde::{Deserialize, Serialize};

use super::{Cell, Coord, Player};
use crate::error::GameError;

/// N x N backing store of which only a hexagonal subset is playable.
///
/// Row `r` is playable for columns `0..(size - |mid - r|)` where
/// `mid = size / 2`: the span loses one cell per row away from the middle
/// row. Non-playable slots are `None` and are never written after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i32,
    cells: Vec<Option<Cell>>,
}

impl Board {
    /// Create a board with the hexagonal footprint, all playable cells empty.
    ///
    /// `size` must already be validated (odd, >= `MIN_BOARD_SIZE`).
    pub fn new(size: i32) -> Self {
        let mid = size / 2;
        let mut cells = vec![None; (size * size) as usize];
        for y in 0..size {
            let span = size - (mid - y).abs();
            for x in 0..span {
                cells[(y * size + x) as usize] = Some(Cell::Empty);
            }
        }
        Self { size, cells }
    }

    /// Create a board with the six starting discs around the centre.
    ///
    /// Canonical seeding with `m = size / 2`:
    /// Black at `(m-1, m-1)`, `(m-1, m+1)`, `(m+1, m)`;
    /// White at `(m, m-1)`, `(m-1, m)`, `(m, m+1)`;
    /// the centre `(m, m)` itself stays empty.
    pub fn starting_layout(size: i32) -> Self {
        let mut board = Self::new(size);
        let m = size / 2;
        let black = [(m - 1, m - 1), (m - 1, m + 1), (m + 1, m)];
        let white = [(m, m - 1), (m - 1, m), (m, m + 1)];
        for (x, y) in black {
            board.cells[(y * size + x) as usize] = Some(Cell::Taken(Player::Black));
        }
        for (x, y) in white {
            board.cells[(y * size + x) as usize] = Some(Cell::Taken(Player::White));
        }
        board
    }

    /// Backing-grid dimension N
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Flat index into the backing store, if inside the N x N grid
    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 || coord.x >= self.size || coord.y >= self.size {
            return None;
        }
        Some((coord.y * self.size + coord.x) as usize)
    }

    /// True iff the coordinate is inside the grid and structurally playable
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|i| self.cells[i].is_some())
    }

    /// Get the cell at a playable coordinate
    #[inline]
    pub fn cell_at(&self, coord: Coord) -> Result<Cell, GameError> {
        self.index(coord)
            .and_then(|i| self.cells[i])
            .ok_or(GameError::InvalidCoordinate(coord))
    }

    /// Overwrite a playable cell. No bounds-check bypass: placing onto a
    /// non-playable coordinate is an error, never a silent write.
    pub fn place(&mut self, coord: Coord, cell: Cell) -> Result<(), GameError> {
        match self.index(coord) {
            Some(i) if self.cells[i].is_some() => {
                self.cells[i] = Some(cell);
                Ok(())
            }
            _ => Err(GameError::InvalidCoordinate(coord)),
        }
    }

    /// Iterate over all playable coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size)
                .map(move |x| Coord::new(x, y))
                .filter(|&c| self.in_bounds(c))
        })
    }

    /// Number of discs owned by a player
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Some(Cell::Taken(player)))
            .count()
    }

    /// Number of playable cells still empty
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Some(Cell::Empty)).count()
    }

    /// Total number of playable cells in the footprint
    pub fn playable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
