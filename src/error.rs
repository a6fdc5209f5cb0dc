//! Structured error types.
//!
//! `MoveError` is a contract violation raised by the engine when a caller
//! bypasses move validation. `InputError` belongs to the console harness and
//! covers the expected, recoverable cases of bad player input. The two are
//! kept apart so a harness can re-prompt on one and abort on the other.

use std::path::PathBuf;

use crate::core::Player;

/// A move the engine refuses to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {pit} is not one of {player}'s pits")]
    OutOfRange { pit: usize, player: Player },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },

    #[error("the game is already over")]
    GameOver,
}

/// A board or session that could not arise from a legal game.
///
/// Raised when positions are built by hand with `Board::from_slots` and when
/// boards or sessions are deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("board holds {total} stones, more than {max} stones", max = crate::core::TOTAL_STONES)]
    TooManyStones { total: u64 },

    #[error("turn numbers start at 1")]
    ZeroTurn,

    #[error("game is recorded as over but pits still hold stones")]
    UnsweptPits,

    #[error("recorded outcome does not match the stores")]
    OutcomeMismatch,
}

/// Errors raised while reading a move from a player.
///
/// The display text of `NotANumber` and `InvalidMove` is what the console
/// shows the player before asking again.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber(String),

    #[error("Invalid move. Choose another pit.")]
    InvalidMove(#[source] MoveError),

    #[error("input ended before the game finished")]
    Eof,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether the harness should ask the player again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, InputError::NotANumber(_) | InputError::InvalidMove(_))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// A raw player number other than 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid player number {0} (expected 1 or 2)")]
pub struct InvalidPlayer(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfRange {
            pit: 7,
            player: Player::One,
        };
        assert_eq!(err.to_string(), "pit 7 is not one of Player 1's pits");
        assert_eq!(MoveError::EmptyPit { pit: 3 }.to_string(), "pit 3 is empty");
    }

    #[test]
    fn test_input_error_messages_match_prompts() {
        let not_number = InputError::NotANumber("abc".into());
        assert_eq!(not_number.to_string(), "Invalid input. Please enter a number.");

        let invalid = InputError::InvalidMove(MoveError::EmptyPit { pit: 0 });
        assert_eq!(invalid.to_string(), "Invalid move. Choose another pit.");
    }

    #[test]
    fn test_input_error_retryable() {
        assert!(InputError::NotANumber(String::new()).is_retryable());
        assert!(InputError::InvalidMove(MoveError::GameOver).is_retryable());
        assert!(!InputError::Eof.is_retryable());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("player name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: player name must not be empty"
        );
    }

    #[test]
    fn test_state_error_display() {
        assert_eq!(
            StateError::TooManyStones { total: 49 }.to_string(),
            "board holds 49 stones, more than 48 stones"
        );
        assert_eq!(StateError::ZeroTurn.to_string(), "turn numbers start at 1");
    }

    #[test]
    fn test_invalid_player_display() {
        assert_eq!(
            InvalidPlayer(3).to_string(),
            "invalid player number 3 (expected 1 or 2)"
        );
    }
}
