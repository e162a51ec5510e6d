//! Win detection logic for tic-tac-toe.

use crate::position::{Direction, Position};
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// A winning line: a starting square walked three steps in a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// First square of the line.
    pub start: Position,
    /// Step vector from the start.
    pub direction: Direction,
}

impl Line {
    /// The three positions along the line, in step order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..3).filter_map(move |times| self.start.step(self.direction, times))
    }
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    Line {
        start: Position::TopLeft,
        direction: Direction::ROW,
    },
    Line {
        start: Position::MiddleLeft,
        direction: Direction::ROW,
    },
    Line {
        start: Position::BottomLeft,
        direction: Direction::ROW,
    },
    // Columns
    Line {
        start: Position::TopLeft,
        direction: Direction::COLUMN,
    },
    Line {
        start: Position::TopCenter,
        direction: Direction::COLUMN,
    },
    Line {
        start: Position::TopRight,
        direction: Direction::COLUMN,
    },
    // Diagonals
    Line {
        start: Position::TopLeft,
        direction: Direction::DIAGONAL_DESCENDING,
    },
    Line {
        start: Position::BottomLeft,
        direction: Direction::DIAGONAL_ASCENDING,
    },
];

/// Checks whether the player holds all three squares of any winning line.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    WINNING_LINES.iter().any(|line| {
        let squares: Vec<Square> = line.positions().map(|position| board.get(position)).collect();
        squares.len() == 3 && squares.iter().all(|&square| square == mark)
    })
}

/// Returns the winner if either player holds a complete line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_winner(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(positions: impl IntoIterator<Item = Position>, player: Player) -> Board {
        let mut board = Board::new();
        for position in positions {
            board = board.with_square(position, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_descending_diagonal() {
        let board = board_with(
            [Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with([Position::TopLeft, Position::TopCenter], Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_square(Position::TopLeft, Player::X)
            .unwrap()
            .with_square(Position::TopCenter, Player::O)
            .unwrap()
            .with_square(Position::TopRight, Player::X)
            .unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(line.positions(), player);
                assert!(is_winner(&board, player), "line {line:?} for {player:?}");
                assert!(!is_winner(&board, player.opponent()));
            }
        }
    }

    #[test]
    fn test_lines_span_three_squares() {
        for line in WINNING_LINES {
            let positions: Vec<Position> = line.positions().collect();
            assert_eq!(positions.len(), 3, "line {line:?}");
            assert_ne!(positions[0], positions[1]);
            assert_ne!(positions[1], positions[2]);
            assert_ne!(positions[0], positions[2]);
        }
    }
}
