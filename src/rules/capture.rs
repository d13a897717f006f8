//! Capture rules for hexagonal Reversi
//!
//! A move is legal on an empty cell iff, in at least one of the six
//! directions, a contiguous run of opponent discs starting at the adjacent
//! cell is terminated by a disc of the moving player. Every opponent disc in
//! such a run is captured.

use crate::board::{Board, Cell, Coord, Player};

use super::direction::Direction;

/// How a directional walk ended.
///
/// Only `OwnDisc` makes the walked run a capture; running into an empty cell
/// or off the playable footprint discards it unflipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkEnd {
    OwnDisc,
    EmptyCell,
    OffBoard,
}

/// Walk outward from `origin`, collecting the contiguous opponent run.
///
/// Each walk owns its coordinate value; nothing is shared between
/// directions. Returns the captured run, empty when the direction
/// contributes nothing (no adjacent opponent, or the run is unterminated).
fn scan_direction(board: &Board, origin: Coord, dir: Direction, player: Player) -> Vec<Coord> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let mut cur = dir.shift(origin);

    let end = loop {
        match board.cell_at(cur) {
            Err(_) => break WalkEnd::OffBoard,
            Ok(Cell::Empty) => break WalkEnd::EmptyCell,
            Ok(Cell::Taken(p)) if p == opponent => {
                run.push(cur);
                cur = dir.shift(cur);
            }
            Ok(Cell::Taken(_)) => break WalkEnd::OwnDisc,
        }
    };

    match end {
        WalkEnd::OwnDisc => run,
        WalkEnd::EmptyCell | WalkEnd::OffBoard => Vec::new(),
    }
}

/// Every opponent coordinate flipped by `player` moving to `target`: the
/// union of the six per-direction capture runs, in `Direction::ALL` order.
///
/// Read-only; does not include `target` itself. The state machine checks
/// that `target` is an empty in-bounds cell before applying anything.
pub fn capture_set(board: &Board, target: Coord, player: Player) -> Vec<Coord> {
    let mut captured = Vec::new();
    for dir in Direction::ALL {
        captured.extend(scan_direction(board, target, dir, player));
    }
    captured
}

/// Check whether `player` may move to `coord`.
#[inline]
pub fn is_legal_move(board: &Board, coord: Coord, player: Player) -> bool {
    matches!(board.cell_at(coord), Ok(Cell::Empty)) && !capture_set(board, coord, player).is_empty()
}

/// All legal moves for `player`, in board iteration order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&c| is_legal_move(board, c, player))
        .collect()
}

/// Early-exit form of `legal_moves` used by terminal detection.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.coords().any(|c| is_legal_move(board, c, player))
}
