//! Result of a finished game.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};

/// Who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Both stores hold the same number of stones.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie => false,
        }
    }
}

/// Final decision plus the store totals it was decided on.
///
/// Displays as the announcement printed at the end of a game:
/// `Player 1 wins!`, `Player 2 wins!` or `It's a tie!`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub result: GameResult,
    pub stores: PlayerMap<u32>,
}

impl Outcome {
    /// Decide the game from final store totals.
    #[must_use]
    pub fn from_stores(stores: PlayerMap<u32>) -> Self {
        let one = stores[Player::One];
        let two = stores[Player::Two];
        let result = match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        };
        Self { result, stores }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::Winner(player) => Some(player),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.result {
            GameResult::Winner(player) => write!(f, "{player} wins!"),
            GameResult::Tie => f.write_str("It's a tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores(one: u32, two: u32) -> PlayerMap<u32> {
        PlayerMap::new(|p| match p {
            Player::One => one,
            Player::Two => two,
        })
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Two);
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));

        let tie = GameResult::Tie;
        assert!(!tie.is_winner(Player::One));
        assert!(!tie.is_winner(Player::Two));
    }

    #[test]
    fn test_outcome_from_stores() {
        assert_eq!(
            Outcome::from_stores(stores(25, 23)).result,
            GameResult::Winner(Player::One)
        );
        assert_eq!(
            Outcome::from_stores(stores(10, 38)).result,
            GameResult::Winner(Player::Two)
        );
        assert_eq!(Outcome::from_stores(stores(24, 24)).result, GameResult::Tie);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::from_stores(stores(30, 18)).to_string(), "Player 1 wins!");
        assert_eq!(Outcome::from_stores(stores(0, 6)).to_string(), "Player 2 wins!");
        assert_eq!(Outcome::from_stores(stores(24, 24)).to_string(), "It's a tie!");
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::from_stores(stores(1, 0)).winner(), Some(Player::One));
        assert_eq!(Outcome::from_stores(stores(5, 5)).winner(), None);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = Outcome::from_stores(stores(20, 28));
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
