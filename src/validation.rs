//! Move preconditions for tic-tac-toe.
//!
//! Preconditions are checked against the current state before any board
//! write. Occupancy is deliberately not checked here: [`crate::Board::with_square`]
//! owns that rule, so the observable error order is finished game, then
//! wrong player, then occupied square.

use crate::action::{Move, MoveError};
use crate::game::OngoingGame;
use tracing::instrument;

/// Precondition: it must be the moving player's turn.
///
/// Turn identity comes from the `next_player` carried by the ongoing
/// state, never re-derived from board content.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition against an ongoing game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::WrongPlayer`] if it is not the player's turn.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &OngoingGame) -> Result<(), MoveError> {
        if action.player != game.next_player() {
            Err(MoveError::WrongPlayer(action.player))
        } else {
            Ok(())
        }
    }
}
