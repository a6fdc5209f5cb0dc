//! Core engine types: board, players, session state, move records,
//! outcomes and configuration.

pub mod action;
pub mod board;
pub mod config;
pub mod outcome;
pub mod player;
pub mod state;

pub use action::MoveRecord;
pub use board::{
    Board, LegalMoves, PITS_PER_SIDE, PLAYER_1_STORE, PLAYER_2_STORE, STONES_PER_PIT,
    TOTAL_SLOTS, TOTAL_STONES,
};
pub use config::{GameConfig, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER};
pub use outcome::{GameResult, Outcome};
pub use player::{Player, PlayerMap};
pub use state::{GameState, Phase};
