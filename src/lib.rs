//! Hexagonal Reversi rules engine
//!
//! A rules engine for Reversi/Othello played on a hexagonal grid:
//! - N x N backing board (N odd, >= 5) with a hexagonal playable footprint
//! - Six-direction capture scan with parity-dependent diagonal shifts
//! - Turn sequencing, pass handling, and game-over detection
//!
//! Rendering and turn orchestration are left to the embedding host; the
//! engine only answers queries and applies validated commands.
//!
//! # Architecture
//!
//! - [`board`]: coordinates, cells, and the hexagonal board store
//! - [`rules`]: direction geometry and the capture engine
//! - [`game`]: the game state machine
//! - [`error`]: caller-visible failure kinds
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Coord, Game, Player};
//!
//! let mut game = Game::new();
//! game.start_game(7).unwrap();
//!
//! // Black opens by flanking the White seed disc left of centre.
//! let flipped = game.make_move(Coord::new(4, 2)).unwrap();
//! assert_eq!(flipped, vec![Coord::new(3, 2)]);
//! assert_eq!(game.current_turn().unwrap(), Player::White);
//! assert_eq!(game.score(Player::Black).unwrap(), 5);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Coord, Player, MIN_BOARD_SIZE};
pub use error::GameError;
pub use game::{EndReason, Game, Record, Status};
pub use rules::Direction;
