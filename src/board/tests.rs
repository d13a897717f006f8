use super::*;
use crate::error::GameError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_cell_helpers() {
    assert!(Cell::Empty.is_empty());
    assert!(!Cell::Taken(Player::Black).is_empty());
    assert_eq!(Cell::Empty.owner(), None);
    assert_eq!(Cell::Taken(Player::White).owner(), Some(Player::White));
}

#[test]
fn test_coord_display() {
    assert_eq!(Coord::new(2, 5).to_string(), "(2, 5)");
    assert_eq!(Coord::new(-1, 0).to_string(), "(-1, 0)");
}

#[test]
fn test_footprint_row_spans_7() {
    let board = Board::new(7);
    // Row y is playable for columns 0..(7 - |3 - y|).
    let spans = [4, 5, 6, 7, 6, 5, 4];
    for (y, &span) in spans.iter().enumerate() {
        let y = y as i32;
        for x in 0..7 {
            assert_eq!(
                board.in_bounds(Coord::new(x, y)),
                x < span,
                "({x}, {y}) span {span}"
            );
        }
    }
}

#[test]
fn test_footprint_outside_grid() {
    let board = Board::new(5);
    assert!(!board.in_bounds(Coord::new(-1, 0)));
    assert!(!board.in_bounds(Coord::new(0, -1)));
    assert!(!board.in_bounds(Coord::new(5, 0)));
    assert!(!board.in_bounds(Coord::new(0, 5)));
}

#[test]
fn test_playable_count() {
    // sum of row spans: N^2 - mid * (mid + 1)
    assert_eq!(Board::new(5).playable_count(), 19);
    assert_eq!(Board::new(7).playable_count(), 37);
    assert_eq!(Board::new(9).playable_count(), 61);
}

#[test]
fn test_coords_iterates_footprint_only() {
    let board = Board::new(7);
    let coords: Vec<Coord> = board.coords().collect();
    assert_eq!(coords.len(), board.playable_count());
    assert!(coords.iter().all(|&c| board.in_bounds(c)));
}

#[test]
fn test_new_board_all_empty() {
    let board = Board::new(5);
    assert_eq!(board.empty_count(), board.playable_count());
    assert_eq!(board.count(Player::Black), 0);
    assert_eq!(board.count(Player::White), 0);
}

#[test]
fn test_starting_layout_seeds() {
    // 7x7, m = 3: three discs per color around an empty centre.
    let board = Board::starting_layout(7);
    assert_eq!(board.count(Player::Black), 3);
    assert_eq!(board.count(Player::White), 3);
    assert_eq!(board.cell_at(Coord::new(3, 3)).unwrap(), Cell::Empty);

    for (x, y) in [(2, 2), (2, 4), (4, 3)] {
        assert_eq!(
            board.cell_at(Coord::new(x, y)).unwrap(),
            Cell::Taken(Player::Black)
        );
    }
    for (x, y) in [(3, 2), (2, 3), (3, 4)] {
        assert_eq!(
            board.cell_at(Coord::new(x, y)).unwrap(),
            Cell::Taken(Player::White)
        );
    }
}

#[test]
fn test_starting_layout_minimum_size() {
    let board = Board::starting_layout(5);
    assert_eq!(board.count(Player::Black), 3);
    assert_eq!(board.count(Player::White), 3);
    assert_eq!(board.cell_at(Coord::new(2, 2)).unwrap(), Cell::Empty);
}

#[test]
fn test_cell_at_invalid_coordinate() {
    let board = Board::new(5);
    // Structurally absent: row 0 spans columns 0..3 on a 5x5 board.
    assert_eq!(
        board.cell_at(Coord::new(4, 0)),
        Err(GameError::InvalidCoordinate(Coord::new(4, 0)))
    );
    assert_eq!(
        board.cell_at(Coord::new(-2, 1)),
        Err(GameError::InvalidCoordinate(Coord::new(-2, 1)))
    );
}

#[test]
fn test_place_overwrites() {
    let mut board = Board::new(5);
    let c = Coord::new(1, 2);
    board.place(c, Cell::Taken(Player::Black)).unwrap();
    assert_eq!(board.cell_at(c).unwrap(), Cell::Taken(Player::Black));
    board.place(c, Cell::Taken(Player::White)).unwrap();
    assert_eq!(board.cell_at(c).unwrap(), Cell::Taken(Player::White));
}

#[test]
fn test_place_rejects_non_playable() {
    let mut board = Board::new(5);
    let before = board.clone();
    assert_eq!(
        board.place(Coord::new(4, 4), Cell::Taken(Player::Black)),
        Err(GameError::InvalidCoordinate(Coord::new(4, 4)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_counts_after_places() {
    let mut board = Board::new(5);
    board.place(Coord::new(0, 0), Cell::Taken(Player::Black)).unwrap();
    board.place(Coord::new(1, 0), Cell::Taken(Player::Black)).unwrap();
    board.place(Coord::new(2, 2), Cell::Taken(Player::White)).unwrap();
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 1);
    assert_eq!(board.empty_count(), 19 - 3);
}
