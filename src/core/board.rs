//! The 14-slot Kalah board and the sowing rules.
//!
//! ## Layout
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                            6
//!         0   1   2   3   4   5
//! ```
//!
//! Indices 0-5 are Player 1's pits and 6 is Player 1's store. Indices 7-12
//! are Player 2's pits and 13 is Player 2's store. Sowing runs counter-
//! clockwise through increasing indices and wraps from 13 back to 0.
//!
//! ## Conservation
//!
//! No operation creates or destroys stones. Sowing moves stones from one
//! pit into the slots that follow it, and the end-game sweep moves each
//! side's remaining pit stones into that side's own store.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::outcome::Outcome;
use super::player::{Player, PlayerMap};
use crate::error::{MoveError, StateError};

/// Pits owned by each player.
pub const PITS_PER_SIDE: usize = 6;
/// Pits plus stores.
pub const TOTAL_SLOTS: usize = 14;
/// Stones placed in every pit at the start of a game.
pub const STONES_PER_PIT: u32 = 4;
/// Stones on a freshly initialized board.
pub const TOTAL_STONES: u32 = STONES_PER_PIT * (2 * PITS_PER_SIDE) as u32;
/// Board index of Player 1's store.
pub const PLAYER_1_STORE: usize = 6;
/// Board index of Player 2's store.
pub const PLAYER_2_STORE: usize = 13;

/// Pit indices a player may currently sow from.
pub type LegalMoves = SmallVec<[usize; PITS_PER_SIDE]>;

/// Stone counts for every pit and store.
///
/// A board never holds more than `TOTAL_STONES` stones, so no count can
/// overflow while stones move around it. Deserialization goes through the
/// same check as `from_slots`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u32; 14]", into = "[u32; 14]")]
pub struct Board {
    slots: [u32; TOTAL_SLOTS],
}

impl Board {
    /// Create the starting board: four stones per pit, empty stores.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = [STONES_PER_PIT; TOTAL_SLOTS];
        slots[PLAYER_1_STORE] = 0;
        slots[PLAYER_2_STORE] = 0;
        Self { slots }
    }

    /// Build a board from explicit slot counts.
    ///
    /// Positions that could not arise in play (for instance with fewer than
    /// 48 stones) are accepted. Boards holding more than `TOTAL_STONES`
    /// stones are rejected.
    pub fn from_slots(slots: [u32; TOTAL_SLOTS]) -> Result<Self, StateError> {
        let total: u64 = slots.iter().map(|&stones| u64::from(stones)).sum();
        if total > u64::from(TOTAL_STONES) {
            return Err(StateError::TooManyStones { total });
        }
        Ok(Self { slots })
    }

    /// All slot counts, indexed as described in the module docs.
    #[must_use]
    pub fn slots(&self) -> &[u32; TOTAL_SLOTS] {
        &self.slots
    }

    /// Stones in a player's six pits, lowest index first.
    #[must_use]
    pub fn pits(&self, player: Player) -> &[u32] {
        &self.slots[player.pits()]
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.slots[player.store()]
    }

    /// Both store totals.
    #[must_use]
    pub fn stores(&self) -> PlayerMap<u32> {
        PlayerMap::new(|player| self.store(player))
    }

    /// Stones still in a player's pits.
    #[must_use]
    pub fn pit_total(&self, player: Player) -> u32 {
        self.pits(player).iter().sum()
    }

    /// Stones on the whole board.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.slots.iter().sum()
    }

    /// Check that `player` may sow from `pit`.
    ///
    /// The pit must be one of the player's own six pits and hold at least
    /// one stone.
    pub fn validate(&self, pit: usize, player: Player) -> Result<(), MoveError> {
        if !player.owns_pit(pit) {
            return Err(MoveError::OutOfRange { pit, player });
        }
        if self.slots[pit] == 0 {
            return Err(MoveError::EmptyPit { pit });
        }
        Ok(())
    }

    /// Whether `player` may sow from `pit`. Never panics, for any `pit`.
    #[must_use]
    pub fn is_valid_move(&self, pit: usize, player: Player) -> bool {
        self.validate(pit, player).is_ok()
    }

    /// Pits `player` may sow from, in index order.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> LegalMoves {
        player
            .pits()
            .filter(|&pit| self.slots[pit] > 0)
            .collect()
    }

    /// Sow the stones of `pit` for `player` and return the index that
    /// received the last stone.
    ///
    /// Stones are dropped one at a time into the following slots, wrapping
    /// around the board. The opponent's store is passed over without
    /// receiving a stone. An illegal move is rejected before the board is
    /// touched.
    pub fn sow(&mut self, pit: usize, player: Player) -> Result<usize, MoveError> {
        self.validate(pit, player)?;

        let skip = player.opponent_store();
        let mut stones = std::mem::take(&mut self.slots[pit]);
        let mut cursor = pit;

        while stones > 0 {
            cursor = (cursor + 1) % TOTAL_SLOTS;
            if cursor == skip {
                continue;
            }
            self.slots[cursor] += 1;
            stones -= 1;
        }

        Ok(cursor)
    }

    /// Check whether either side's pits are empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        Player::ALL.iter().any(|&player| self.pit_total(player) == 0)
    }

    /// End the game if either side has run out of stones.
    ///
    /// On a decision every player's remaining pit stones are swept into
    /// their own store before the stores are compared. Returns `None`
    /// without touching the board while both sides still have stones.
    /// Calling this again after a decision returns the same outcome.
    pub fn check_winner(&mut self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        self.sweep();
        Some(Outcome::from_stores(self.stores()))
    }

    fn sweep(&mut self) {
        for player in Player::ALL {
            let remaining = self.pit_total(player);
            for pit in player.pits() {
                self.slots[pit] = 0;
            }
            self.slots[player.store()] += remaining;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[u32; TOTAL_SLOTS]> for Board {
    type Error = StateError;

    fn try_from(slots: [u32; TOTAL_SLOTS]) -> Result<Self, Self::Error> {
        Self::from_slots(slots)
    }
}

impl From<Board> for [u32; TOTAL_SLOTS] {
    fn from(board: Board) -> Self {
        board.slots
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

/// Three rows: Player 2's pits right to left, the two stores, then
/// Player 1's pits left to right.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top = join_row(self.pits(Player::Two).iter().rev());
        let bottom = join_row(self.pits(Player::One).iter());

        writeln!(f, "  {top}  ")?;
        writeln!(
            f,
            "{}                   {}",
            self.store(Player::Two),
            self.store(Player::One)
        )?;
        write!(f, "  {bottom}  ")
    }
}

fn join_row<'a>(pits: impl Iterator<Item = &'a u32>) -> String {
    pits.map(u32::to_string).collect::<Vec<_>>().join("  ")
}
