use crate::board::Coord;

/// Caller-visible failures of the rules engine.
///
/// Every failure is rejected before any mutation, so the game is always left
/// in its last valid state and the caller may retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game has already started")]
    AlreadyStarted,

    #[error("invalid board size {0}: must be odd and at least 5")]
    InvalidBoardSize(i32),

    #[error("game has not started")]
    GameNotStarted,

    #[error("coordinate {0} is not a playable cell")]
    InvalidCoordinate(Coord),

    #[error("cell {0} is already occupied")]
    NotEmptyCell(Coord),

    #[error("move to {0} captures nothing in any direction")]
    NoCaptureAvailable(Coord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GameError::InvalidBoardSize(4).to_string(),
            "invalid board size 4: must be odd and at least 5"
        );
        assert_eq!(
            GameError::InvalidCoordinate(Coord::new(9, 0)).to_string(),
            "coordinate (9, 0) is not a playable cell"
        );
        assert_eq!(
            GameError::NoCaptureAvailable(Coord::new(1, 1)).to_string(),
            "move to (1, 1) captures nothing in any direction"
        );
    }
}
