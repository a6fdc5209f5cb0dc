//! Rules engine trait for game implementations.
//!
//! The engine implements `RulesEngine` to define:
//! - The starting position
//! - Which moves are legal
//! - How moves modify state
//! - When the game ends and who won

use crate::core::board::LegalMoves;
use crate::core::{GameConfig, GameState, MoveRecord, Outcome, Player};
use crate::error::MoveError;

/// Rules engine trait.
///
/// A turn loop calls these methods in order every cycle:
/// `check_winner`, then `is_valid_move` on the player's choice, then
/// `apply_move`.
///
/// ## Implementation Notes
///
/// - `is_valid_move`: must not mutate and must accept any `pit` value
/// - `apply_move`: re-validates and returns `MoveError` instead of
///   corrupting the board
/// - `check_winner`: return None if the game continues
pub trait RulesEngine {
    /// Get the session configuration.
    fn config(&self) -> &GameConfig;

    /// Create the state for a new game.
    fn initial_state(&self) -> GameState;

    /// Check whether `player` may sow from `pit` right now.
    fn is_valid_move(&self, state: &GameState, player: Player, pit: usize) -> bool;

    /// Apply a move and advance the turn.
    fn apply_move(
        &self,
        state: &mut GameState,
        player: Player,
        pit: usize,
    ) -> Result<MoveRecord, MoveError>;

    /// Check if the game is over, finishing it if so.
    ///
    /// Returns `Some(outcome)` if the game has ended, `None` if it continues.
    fn check_winner(&self, state: &mut GameState) -> Option<Outcome>;

    // === Convenience Methods ===

    /// Enumerate all legal moves for a player.
    ///
    /// Default implementation filters the player's pits through
    /// `is_valid_move`.
    fn legal_moves(&self, state: &GameState, player: Player) -> LegalMoves {
        player
            .pits()
            .filter(|&pit| self.is_valid_move(state, player, pit))
            .collect()
    }
}
