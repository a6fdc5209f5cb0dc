//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of the board. Player 1 owns pits 0-5 and store 6,
//! Player 2 owns pits 7-12 and store 13.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for names and final
//! store totals.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::board::{PITS_PER_SIDE, PLAYER_1_STORE, PLAYER_2_STORE};
use crate::error::InvalidPlayer;

/// One of the two players.
///
/// Serializes as its number (1 or 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The player's number as shown to humans (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Slot index for `PlayerMap` (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::One => PLAYER_1_STORE,
            Player::Two => PLAYER_2_STORE,
        }
    }

    /// Board index of the store this player's sowing skips.
    #[must_use]
    pub const fn opponent_store(self) -> usize {
        self.other().store()
    }

    /// Board indices of this player's six pits.
    #[must_use]
    pub const fn pits(self) -> Range<usize> {
        let start = self.store() - PITS_PER_SIDE;
        start..self.store()
    }

    /// Check if `pit` is one of this player's pits.
    ///
    /// Stores, opponent pits and out-of-board indices are all rejected.
    #[must_use]
    pub fn owns_pit(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }

    /// Who moves after this player's last stone landed on `last_index`.
    ///
    /// Landing in one's own store grants another move.
    #[must_use]
    pub fn next_turn(self, last_index: usize) -> Player {
        if last_index == self.store() {
            self
        } else {
            self.other()
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayer;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(InvalidPlayer(other)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.number()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// Serializes as a two-element array, Player 1 first.
///
/// ```
/// use rust_mancala::core::{Player, PlayerMap};
///
/// let mut stores: PlayerMap<u32> = PlayerMap::with_value(0);
/// stores[Player::Two] = 12;
/// assert_eq!(stores[Player::One], 0);
/// assert_eq!(stores[Player::Two], 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_layout() {
        assert_eq!(Player::One.pits(), 0..6);
        assert_eq!(Player::Two.pits(), 7..13);
        assert_eq!(Player::One.store(), 6);
        assert_eq!(Player::Two.store(), 13);
        assert_eq!(Player::One.opponent_store(), 13);
        assert_eq!(Player::Two.opponent_store(), 6);
    }

    #[test]
    fn test_owns_pit_rejects_stores_and_opponent_pits() {
        assert!(Player::One.owns_pit(0));
        assert!(Player::One.owns_pit(5));
        assert!(!Player::One.owns_pit(6));
        assert!(!Player::One.owns_pit(7));
        assert!(!Player::Two.owns_pit(13));
        assert!(!Player::Two.owns_pit(6));
        assert!(!Player::Two.owns_pit(usize::MAX));
    }

    #[test]
    fn test_next_turn() {
        assert_eq!(Player::One.next_turn(6), Player::One);
        assert_eq!(Player::One.next_turn(9), Player::Two);
        assert_eq!(Player::Two.next_turn(13), Player::Two);
        assert_eq!(Player::Two.next_turn(3), Player::One);
    }

    #[test]
    fn test_player_number_conversion() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert_eq!(Player::try_from(0), Err(InvalidPlayer(0)));
        assert_eq!(u8::from(Player::Two), 2);
        assert_eq!(format!("{}", Player::One), "Player 1");
    }

    #[test]
    fn test_player_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        let player: Player = serde_json::from_str("1").unwrap();
        assert_eq!(player, Player::One);
        assert!(serde_json::from_str::<Player>("3").is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.store());
        assert_eq!(map[Player::One], 6);
        assert_eq!(map[Player::Two], 13);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();
        map[Player::One] = 10;
        *map.get_mut(Player::Two) += 20;

        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new(|p| p.number());
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::One, &1), (Player::Two, &2)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new(|p| format!("name {}", p.number()));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"["name 1","name 2"]"#);
        let deserialized: PlayerMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
