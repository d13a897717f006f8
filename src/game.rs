//! Game state machine: turn order, move application, terminal detection
//!
//! Owns the board, the turn cursor, and the lifecycle state
//! (`NotStarted -> Ongoing -> Over`). Validation fully precedes mutation:
//! a rejected command leaves the game bit-identical to before the call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Cell, Coord, Player, MIN_BOARD_SIZE};
use crate::error::GameError;
use crate::rules::{capture_set, has_legal_move, legal_moves};

/// Why a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Two consecutive passes, or neither color has a legal move left.
    Stalemate,
    Win(Player),
}

/// Lifecycle state. Once `Over`, it never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    NotStarted,
    Ongoing,
    Over(EndReason),
}

/// One accepted action, as appended to the game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    Move {
        player: Player,
        coord: Coord,
        flipped: Vec<Coord>,
    },
    Pass {
        player: Player,
    },
}

/// A hexagonal Reversi game.
///
/// Single-threaded and synchronous; a host embedding several games must
/// serialize access per instance externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Option<Board>,
    turn: Player,
    status: Status,
    history: Vec<Record>,
}

impl Game {
    /// Create a game in the `NotStarted` state.
    pub fn new() -> Self {
        Self {
            board: None,
            turn: Player::Black,
            status: Status::NotStarted,
            history: Vec::new(),
        }
    }

    /// Start the game on an N x N backing grid.
    ///
    /// `size` must be odd and at least `MIN_BOARD_SIZE`. Black moves first.
    pub fn start_game(&mut self, size: i32) -> Result<(), GameError> {
        if self.status != Status::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        if size < MIN_BOARD_SIZE || size % 2 == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        self.board = Some(Board::starting_layout(size));
        self.turn = Player::Black;
        self.status = Status::Ongoing;
        debug!(size, "game started");
        Ok(())
    }

    /// Place the current player's disc at `coord` and flip every captured
    /// opponent disc. Returns the flipped coordinates.
    ///
    /// Fails without mutating anything when the coordinate is not playable,
    /// the cell is occupied, or no direction yields a capture.
    pub fn make_move(&mut self, coord: Coord) -> Result<Vec<Coord>, GameError> {
        if self.status != Status::Ongoing {
            return Err(GameError::GameNotStarted);
        }
        let player = self.turn;
        let board = self.board.as_mut().ok_or(GameError::GameNotStarted)?;

        if !board.cell_at(coord)?.is_empty() {
            return Err(GameError::NotEmptyCell(coord));
        }
        let flipped = capture_set(board, coord, player);
        if flipped.is_empty() {
            return Err(GameError::NoCaptureAvailable(coord));
        }

        board.place(coord, Cell::Taken(player))?;
        for &c in &flipped {
            board.place(c, Cell::Taken(player))?;
        }
        debug!(%player, %coord, flips = flipped.len(), "move accepted");
        self.history.push(Record::Move {
            player,
            coord,
            flipped: flipped.clone(),
        });
        self.turn = player.opponent();
        self.evaluate_end();
        Ok(flipped)
    }

    /// Forfeit the current player's turn without placing a disc.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.status != Status::Ongoing {
            return Err(GameError::GameNotStarted);
        }
        let player = self.turn;
        debug!(%player, "pass");
        self.history.push(Record::Pass { player });
        self.turn = player.opponent();
        self.evaluate_end();
        Ok(())
    }

    /// Terminal-condition check, run after every accepted move or pass.
    ///
    /// Priority order: consecutive passes, the side to move wiped out, the
    /// opponent wiped out, then no legal move left for either color.
    fn evaluate_end(&mut self) {
        let board = match &self.board {
            Some(b) => b,
            None => return,
        };
        let two_passes = matches!(
            self.history.as_slice(),
            [.., Record::Pass { .. }, Record::Pass { .. }]
        );
        let reason = if two_passes {
            Some(EndReason::Stalemate)
        } else if board.count(self.turn) == 0 {
            Some(EndReason::Win(self.turn.opponent()))
        } else if board.count(self.turn.opponent()) == 0 {
            Some(EndReason::Win(self.turn))
        } else if !has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White) {
            Some(EndReason::Stalemate)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(?reason, "game over");
            self.status = Status::Over(reason);
        }
    }

    #[inline]
    fn board_ref(&self) -> Result<&Board, GameError> {
        self.board.as_ref().ok_or(GameError::GameNotStarted)
    }

    /// The player whose turn it is.
    pub fn current_turn(&self) -> Result<Player, GameError> {
        self.board_ref()?;
        Ok(self.turn)
    }

    /// Number of discs the player currently owns.
    pub fn score(&self, player: Player) -> Result<usize, GameError> {
        Ok(self.board_ref()?.count(player))
    }

    /// Cell state at a playable coordinate.
    pub fn cell_at(&self, coord: Coord) -> Result<Cell, GameError> {
        self.board_ref()?.cell_at(coord)
    }

    /// Whether the disc at `coord` has been flipped to some player's color.
    pub fn is_flipped(&self, coord: Coord) -> Result<bool, GameError> {
        Ok(!self.cell_at(coord)?.is_empty())
    }

    /// Backing-grid dimension of the running game.
    pub fn size(&self) -> Result<i32, GameError> {
        Ok(self.board_ref()?.size())
    }

    /// Legal moves for the current player, in board order. A controller uses
    /// an empty result to force a pass.
    pub fn legal_moves(&self) -> Result<Vec<Coord>, GameError> {
        Ok(legal_moves(self.board_ref()?, self.turn))
    }

    /// True once the game has reached a terminal state.
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    /// Terminal reason, once the game is over.
    pub fn outcome(&self) -> Option<EndReason> {
        match self.status {
            Status::Over(reason) => Some(reason),
            _ => None,
        }
    }

    /// Every accepted action, oldest first.
    pub fn history(&self) -> &[Record] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
