//! Move records for history tracking.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A completed move.
///
/// Used for:
/// - Replaying or auditing a session
/// - Checking extra-turn chains in tests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who sowed.
    pub player: Player,

    /// The pit the stones were taken from.
    pub pit: usize,

    /// Number of stones sown.
    pub stones: u32,

    /// Board index that received the last stone.
    pub last_index: usize,

    /// True if the last stone landed in the mover's own store.
    pub extra_turn: bool,

    /// Turn number when the move was made. A turn spans every move one
    /// player makes before the other player is up.
    pub turn: u32,

    /// Sequence number within the turn (0 for the first move).
    pub sequence: u32,
}

impl MoveRecord {
    /// Who moves after this one.
    #[must_use]
    pub fn next_player(&self) -> Player {
        if self.extra_turn {
            self.player
        } else {
            self.player.other()
        }
    }
}
