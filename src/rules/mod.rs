//! Game rules for hexagonal Reversi
//!
//! This module implements the move rules:
//! - The six hex directions and their parity-dependent shifts
//! - Capture runs (directional scan, flip set computation)
//! - Legal-move enumeration

pub mod capture;
pub mod direction;

// Re-exports for convenient access
pub use capture::{capture_set, has_legal_move, is_legal_move, legal_moves};
pub use direction::Direction;
