//! Game states and the move transition engine.
//!
//! The game is a sum type with one variant per phase, so phase-specific
//! data exists only where it is meaningful: `next_player` while the game
//! is ongoing, `winner` once it is won, neither on a draw.
//!
//! Transitions are pure: [`Game::play`] borrows the current state and
//! returns a brand-new one, so callers keep their pre-call value on
//! error, and replaying the same move on the same state always yields
//! the same result.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player};
use crate::validation::PlayersTurn;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Ongoing Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: the board plus whose turn is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OngoingGame {
    board: Board,
    next_player: Player,
}

impl OngoingGame {
    /// Creates a fresh game: empty board, the given player to move first.
    ///
    /// The starting player is the caller's choice, conventionally
    /// [`Player::X`].
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            next_player: starting_player,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player expected to move next.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the positions still open for a move.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Applies one move and returns the resulting state.
    ///
    /// Checks turn order, places the mark, then classifies the new board:
    /// a completed line wins, a full board without one draws, anything
    /// else continues with the other player. Win is checked before
    /// fullness, so a move that does both wins.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::WrongPlayer`] if it is not the player's turn,
    /// or [`MoveError::SquareOccupied`] if the target square holds a mark.
    #[instrument(skip(self))]
    pub fn play(&self, action: Move) -> Result<Game, MoveError> {
        PlayersTurn::check(&action, self)?;
        let board = self.board.with_square(action.position, action.player)?;

        if rules::is_winner(&board, action.player) {
            return Ok(Game::Won(WonGame {
                board,
                winner: action.player,
            }));
        }

        if rules::is_full(&board) {
            return Ok(Game::Draw(DrawGame { board }));
        }

        Ok(Game::Ongoing(OngoingGame {
            board,
            next_player: action.player.opponent(),
        }))
    }
}

// ─────────────────────────────────────────────────────────────
//  Terminal Phases
// ─────────────────────────────────────────────────────────────

/// Finished game with a winner.
///
/// The winner is always present, not `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonGame {
    board: Board,
    winner: Player,
}

impl WonGame {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the winning player.
    pub fn winner(&self) -> Player {
        self.winner
    }
}

/// Finished game with a full board and no winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawGame {
    board: Board,
}

impl DrawGame {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

// ─────────────────────────────────────────────────────────────
//  Sum Type
// ─────────────────────────────────────────────────────────────

/// Complete game state: exactly one of ongoing, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    /// Game continues; a move is expected.
    Ongoing(OngoingGame),
    /// Game ended with a winner.
    Won(WonGame),
    /// Game ended with a full board and no winner.
    Draw(DrawGame),
}

impl Game {
    /// Creates a fresh ongoing game with an empty board.
    pub fn new(starting_player: Player) -> Self {
        Game::Ongoing(OngoingGame::new(starting_player))
    }

    /// Applies one move and returns the resulting state.
    ///
    /// The finished-game check runs before any other validation, so a
    /// move against a terminal state fails the same way regardless of
    /// what else is wrong with it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameFinished`] if the game is over,
    /// [`MoveError::WrongPlayer`] if it is not the player's turn, or
    /// [`MoveError::SquareOccupied`] if the target square holds a mark.
    #[instrument(skip(self))]
    pub fn play(&self, action: Move) -> Result<Game, MoveError> {
        match self {
            Game::Ongoing(game) => game.play(action),
            Game::Won(_) | Game::Draw(_) => Err(MoveError::GameFinished),
        }
    }

    /// Folds a move sequence over a fresh game.
    ///
    /// # Errors
    ///
    /// Propagates the first [`MoveError`] encountered, if any.
    #[instrument]
    pub fn replay(starting_player: Player, moves: &[Move]) -> Result<Game, MoveError> {
        let mut game = Game::new(starting_player);
        for action in moves {
            game = game.play(*action)?;
        }
        Ok(game)
    }

    /// Returns the board, whatever the phase.
    pub fn board(&self) -> &Board {
        match self {
            Game::Ongoing(game) => game.board(),
            Game::Won(game) => game.board(),
            Game::Draw(game) => game.board(),
        }
    }

    /// Returns the player to move, if the game is ongoing.
    pub fn next_player(&self) -> Option<Player> {
        match self {
            Game::Ongoing(game) => Some(game.next_player()),
            Game::Won(_) | Game::Draw(_) => None,
        }
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Game::Won(game) => Some(game.winner()),
            Game::Ongoing(_) | Game::Draw(_) => None,
        }
    }

    /// Returns true if the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Game::Ongoing(_))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Game::Ongoing(game) => write!(f, "{} to move\n{}", game.next_player(), game.board()),
            Game::Won(game) => write!(f, "Player {} wins\n{}", game.winner(), game.board()),
            Game::Draw(game) => write!(f, "Draw\n{}", game.board()),
        }
    }
}
