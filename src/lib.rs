//! Pure tic-tac-toe rules engine.
//!
//! This library advances a 3x3 tic-tac-toe game one move at a time,
//! enforcing turn order, square occupancy, and win/draw detection. It
//! performs no I/O and holds no shared state: every transition borrows
//! the current [`Game`] and returns a new one, so a host (CLI, UI,
//! server) owns the move loop and any rendering or persistence.
//!
//! # Architecture
//!
//! - **Types**: board, squares, and players
//! - **Rules**: win and draw classification over a board
//! - **Validation**: move preconditions checked before any board write
//! - **Game**: the phase sum type and the `play` transition
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Move, Player, Position};
//!
//! let game = Game::new(Player::X);
//! let game = game.play(Move::new(Player::X, Position::Center))?;
//! assert_eq!(game.next_player(), Some(Player::O));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod position;
mod rules;
mod types;
mod validation;

// Crate-level exports - Moves and rule violations
pub use action::{Move, MoveError};

// Crate-level exports - Game states and transitions
pub use game::{DrawGame, Game, OngoingGame, WonGame};

// Crate-level exports - Board geometry
pub use position::{Direction, Position};

// Crate-level exports - Rule predicates
pub use rules::{Line, WINNING_LINES, check_winner, is_draw, is_full, is_winner};

// Crate-level exports - Core domain types
pub use types::{Board, Player, Square};

// Crate-level exports - Move preconditions
pub use validation::PlayersTurn;
