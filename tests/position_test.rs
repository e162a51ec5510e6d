//! Tests for board positions and geometry.

use tictactoe_core::{Board, Direction, Player, Position, WINNING_LINES};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_at_matches_row_and_column() {
    for position in Position::ALL {
        assert_eq!(Position::at(position.row(), position.column()), Some(position));
    }
    assert_eq!(Position::at(3, 1), None);
    assert_eq!(Position::at(1, 3), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9); // All positions valid on empty board
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = Board::new()
        .with_square(Position::TopLeft, Player::X)
        .unwrap()
        .with_square(Position::Center, Player::O)
        .unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_eight_winning_lines_cover_rows_columns_diagonals() {
    assert_eq!(WINNING_LINES.len(), 8);

    let rows = WINNING_LINES
        .iter()
        .filter(|l| l.direction == Direction::ROW)
        .count();
    let columns = WINNING_LINES
        .iter()
        .filter(|l| l.direction == Direction::COLUMN)
        .count();
    assert_eq!(rows, 3);
    assert_eq!(columns, 3);

    // Two diagonals, one descending and one ascending.
    assert!(
        WINNING_LINES
            .iter()
            .any(|l| l.direction == Direction::DIAGONAL_DESCENDING)
    );
    assert!(
        WINNING_LINES
            .iter()
            .any(|l| l.direction == Direction::DIAGONAL_ASCENDING)
    );
}

#[test]
fn test_lines_stay_on_board() {
    for line in WINNING_LINES {
        assert_eq!(line.positions().count(), 3);
    }
}
