//! # rust-mancala
//!
//! A rules engine for Kalah, the two-player Mancala variant with six pits
//! and four stones per pit, plus a small console harness to play it.
//!
//! ## Design Principles
//!
//! 1. **Fixed Array Board**: The board is a `[u32; 14]` owned by one game
//!    session. No globals, no shared state.
//!
//! 2. **Validate Before Mutating**: Every operation that changes the board
//!    re-checks legality first and returns a `MoveError` instead of
//!    corrupting the position.
//!
//! 3. **Engine Behind a Trait**: Turn loops talk to `RulesEngine`, never to
//!    the board directly.
//!
//! ## Modules
//!
//! - `core`: Board, players, session state, move records, outcomes, configuration
//! - `rules`: RulesEngine trait
//! - `games`: The Kalah implementation of `RulesEngine`
//! - `console`: Line-based harness (prompts, rendering, input re-prompting)
//! - `error`: Structured error types
//!
//! ## Example
//!
//! ```
//! use rust_mancala::{KalahBuilder, Player, RulesEngine};
//!
//! let (game, mut state) = KalahBuilder::new().build();
//! assert!(game.is_valid_move(&state, Player::One, 2));
//!
//! // Pit 2 holds four stones; the last one lands in Player 1's store.
//! let record = game.apply_move(&mut state, Player::One, 2).unwrap();
//! assert!(record.extra_turn);
//! assert_eq!(state.current_player(), Some(Player::One));
//! assert!(game.check_winner(&mut state).is_none());
//! ```

pub mod console;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, GameConfig, GameResult, GameState, LegalMoves, MoveRecord, Outcome, Phase, Player,
    PlayerMap,
};

pub use crate::console::Console;
pub use crate::error::{ConfigError, InputError, MoveError, StateError};
pub use crate::games::kalah::{Kalah, KalahBuilder};
pub use crate::rules::RulesEngine;
