//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// All three variants are rule violations by the caller, not internal
/// faults. They are reported in a fixed order: a finished game is
/// reported before a wrong player, which is reported before an occupied
/// square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over; no further moves are accepted.
    #[display("Game has already finished")]
    GameFinished,

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(Player),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accessors() {
        let action = Move::new(Player::X, Position::Center);
        assert_eq!(action.player(), Player::X);
        assert_eq!(action.position(), Position::Center);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoveError::GameFinished.to_string(),
            "Game has already finished"
        );
        assert_eq!(
            MoveError::WrongPlayer(Player::O).to_string(),
            "It's not O's turn"
        );
        assert_eq!(
            MoveError::SquareOccupied(Position::TopLeft).to_string(),
            "Square TopLeft is already occupied"
        );
    }
}
