//! Kalah game implementation.

use crate::core::{GameConfig, GameState, MoveRecord, Outcome, Player};
use crate::error::MoveError;
use crate::rules::RulesEngine;

/// The Kalah rules engine.
#[derive(Clone, Debug, Default)]
pub struct Kalah {
    config: GameConfig,
}

/// Builder for creating a Kalah game.
#[derive(Clone, Debug, Default)]
pub struct KalahBuilder {
    config: GameConfig,
}

impl KalahBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_name(mut self, player: Player, name: impl Into<String>) -> Self {
        self.config = self.config.with_name(player, name);
        self
    }

    /// Build the game and initial state.
    pub fn build(self) -> (Kalah, GameState) {
        let game = Kalah {
            config: self.config,
        };
        let state = game.initial_state();
        (game, state)
    }
}

impl Kalah {
    /// Get a player's display name.
    pub fn player_name(&self, player: Player) -> &str {
        self.config.name(player)
    }
}

impl RulesEngine for Kalah {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initial_state(&self) -> GameState {
        GameState::new()
    }

    fn is_valid_move(&self, state: &GameState, player: Player, pit: usize) -> bool {
        // Only the player to move can act
        state.current_player() == Some(player) && state.board().is_valid_move(pit, player)
    }

    fn apply_move(
        &self,
        state: &mut GameState,
        player: Player,
        pit: usize,
    ) -> Result<MoveRecord, MoveError> {
        state.play_as(player, pit)
    }

    fn check_winner(&self, state: &mut GameState) -> Option<Outcome> {
        state.check_winner()
    }
}
