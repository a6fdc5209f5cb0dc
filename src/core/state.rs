//! Session state: board, whose turn it is, and move history.
//!
//! ## Phases
//!
//! A session is either waiting on a player (`Phase::Turn`) or finished
//! (`Phase::GameOver`). Player 1 always moves first. After each move the
//! turn passes to the other player unless the last stone landed in the
//! mover's own store.
//!
//! The end of the game is detected by `check_winner`, which the turn loop
//! calls at the start of every cycle before asking for a move.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::action::MoveRecord;
use super::board::Board;
use super::outcome::Outcome;
use super::player::Player;
use crate::error::{MoveError, StateError};

/// Where the session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to move.
    Turn(Player),
    /// The game has been decided.
    GameOver(Outcome),
}

/// Complete state of one game session.
///
/// Cloning is cheap: the history is an `im` persistent vector.
/// Deserialized sessions are checked for a legal board, a turn number of at
/// least 1, and a recorded outcome that matches the swept stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct GameState {
    board: Board,
    phase: Phase,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Move sequence within the current turn.
    move_sequence: u32,

    history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a new game on a fresh board with Player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::One)
    }

    /// Resume play from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            phase: Phase::Turn(to_move),
            turn_number: 1,
            move_sequence: 0,
            history: Vector::new(),
        }
    }

    /// Get reference to board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::Turn(player) => Some(player),
            Phase::GameOver(_) => None,
        }
    }

    /// Get game outcome if game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Turn(_) => None,
            Phase::GameOver(outcome) => Some(outcome),
        }
    }

    /// Check if game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Current turn number.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// All moves made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Whether the player to move may sow from `pit`.
    #[must_use]
    pub fn is_valid_move(&self, pit: usize) -> bool {
        self.current_player()
            .is_some_and(|player| self.board.is_valid_move(pit, player))
    }

    /// Make a move for whoever is to move.
    pub fn play(&mut self, pit: usize) -> Result<MoveRecord, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;
        self.play_as(player, pit)
    }

    /// Make a move for `player`, checking that it is their turn.
    ///
    /// Sows the pit, records the move and advances the turn. The state is
    /// left untouched if the move is rejected.
    pub fn play_as(&mut self, player: Player, pit: usize) -> Result<MoveRecord, MoveError> {
        let expected = self.current_player().ok_or(MoveError::GameOver)?;
        if expected != player {
            warn!(%expected, actual = %player, pit, "move out of turn rejected");
            return Err(MoveError::NotYourTurn {
                expected,
                actual: player,
            });
        }

        let stones = self.board.slots().get(pit).copied().unwrap_or(0);
        let last_index = self.board.sow(pit, player).inspect_err(|err| {
            warn!(%player, pit, %err, "illegal move rejected");
        })?;

        let next = player.next_turn(last_index);
        let record = MoveRecord {
            player,
            pit,
            stones,
            last_index,
            extra_turn: next == player,
            turn: self.turn_number,
            sequence: self.next_sequence(),
        };
        debug!(
            %player,
            pit,
            stones,
            last_index,
            extra_turn = record.extra_turn,
            "move applied"
        );
        self.history.push_back(record);

        if next != player {
            self.advance_turn();
        }
        self.phase = Phase::Turn(next);

        Ok(record)
    }

    /// Detect the end of the game.
    ///
    /// When either side's pits are empty the remaining stones are swept
    /// into their owners' stores and the session moves to `GameOver`.
    /// Once decided, later calls return the same outcome.
    pub fn check_winner(&mut self) -> Option<Outcome> {
        if let Phase::GameOver(outcome) = self.phase {
            return Some(outcome);
        }

        let outcome = self.board.check_winner()?;
        info!(
            %outcome,
            player_one = outcome.stores[Player::One],
            player_two = outcome.stores[Player::Two],
            moves = self.history.len(),
            "game over"
        );
        self.phase = Phase::GameOver(outcome);
        Some(outcome)
    }

    fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.move_sequence = 0;
    }

    fn next_sequence(&mut self) -> u32 {
        let seq = self.move_sequence;
        self.move_sequence += 1;
        seq
    }
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct SessionSnapshot {
    board: Board,
    phase: Phase,
    turn_number: u32,
    move_sequence: u32,
    history: Vector<MoveRecord>,
}

impl TryFrom<SessionSnapshot> for GameState {
    type Error = StateError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        if snapshot.turn_number == 0 {
            return Err(StateError::ZeroTurn);
        }
        if let Phase::GameOver(outcome) = snapshot.phase {
            let board = &snapshot.board;
            if Player::ALL.iter().any(|&player| board.pit_total(player) > 0) {
                return Err(StateError::UnsweptPits);
            }
            if outcome != Outcome::from_stores(board.stores()) {
                return Err(StateError::OutcomeMismatch);
            }
        }

        Ok(Self {
            board: snapshot.board,
            phase: snapshot.phase,
            turn_number: snapshot.turn_number,
            move_sequence: snapshot.move_sequence,
            history: snapshot.history,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameResult, PlayerMap, PLAYER_1_STORE, TOTAL_STONES};

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Some(Player::One));
        assert_eq!(state.turn_number(), 1);
        assert!(!state.is_terminal());
        assert!(state.history().is_empty());
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_play_passes_turn() {
        let mut state = GameState::new();
        let record = state.play(5).unwrap();

        assert_eq!(record.last_index, 9);
        assert_eq!(record.stones, 4);
        assert!(!record.extra_turn);
        assert_eq!(state.current_player(), Some(Player::Two));
        assert_eq!(state.turn_number(), 2);
    }

    #[test]
    fn test_extra_turn_keeps_player() {
        let mut state = GameState::new();
        let record = state.play(2).unwrap();

        assert_eq!(record.last_index, PLAYER_1_STORE);
        assert!(record.extra_turn);
        assert_eq!(state.current_player(), Some(Player::One));
        assert_eq!(state.turn_number(), 1);

        // Second move of the same turn gets the next sequence number.
        let second = state.play(5).unwrap();
        assert_eq!(second.turn, 1);
        assert_eq!(second.sequence, 1);
        assert_eq!(state.current_player(), Some(Player::Two));
    }

    #[test]
    fn test_history_records_moves_in_order() {
        let mut state = GameState::new();
        state.play(0).unwrap();
        state.play(7).unwrap();

        let pits: Vec<_> = state.history().iter().map(|r| r.pit).collect();
        assert_eq!(pits, vec![0, 7]);
        assert_eq!(state.history()[1].player, Player::Two);
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut state = GameState::new();
        let before = state.clone();

        assert_eq!(
            state.play(7),
            Err(MoveError::OutOfRange {
                pit: 7,
                player: Player::One
            })
        );
        assert_eq!(
            state.play(42),
            Err(MoveError::OutOfRange {
                pit: 42,
                player: Player::One
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_out_of_turn() {
        let mut state = GameState::new();
        assert_eq!(
            state.play_as(Player::Two, 7),
            Err(MoveError::NotYourTurn {
                expected: Player::One,
                actual: Player::Two
            })
        );
    }

    #[test]
    fn test_is_valid_move_for_current_player() {
        let mut state = GameState::new();
        assert!(state.is_valid_move(0));
        assert!(!state.is_valid_move(7));

        state.play(5).unwrap();
        assert!(state.is_valid_move(7));
        assert!(!state.is_valid_move(0));
    }

    #[test]
    fn test_check_winner_transitions_to_game_over() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 0, 3, 0, 2, 0, 0, 1, 0]).unwrap();
        let mut state = GameState::from_board(board, Player::One);

        let outcome = state.check_winner().unwrap();
        assert_eq!(outcome.result, GameResult::Winner(Player::Two));
        assert!(state.is_terminal());
        assert_eq!(state.current_player(), None);
        assert_eq!(state.outcome(), Some(outcome));

        assert_eq!(state.play(0), Err(MoveError::GameOver));
        assert!(!state.is_valid_move(0));

        let after = state.clone();
        assert_eq!(state.check_winner(), Some(outcome));
        assert_eq!(state, after);
    }

    #[test]
    fn test_check_winner_mid_game() {
        let mut state = GameState::new();
        state.play(3).unwrap();
        let before = state.clone();

        assert_eq!(state.check_winner(), None);
        assert_eq!(state, before);
        assert_eq!(state.board().total_stones(), TOTAL_STONES);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new();
        state.play(0).unwrap();
        let snapshot = state.clone();
        state.play(7).unwrap();

        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new();
        state.play(2).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_finished_state_roundtrips() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 0, 3, 0, 2, 0, 0, 1, 0]).unwrap();
        let mut state = GameState::from_board(board, Player::One);
        state.check_winner().unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_sessions() {
        let fresh = serde_json::to_value(GameState::new()).unwrap();

        let mut zero_turn = fresh.clone();
        zero_turn["turn_number"] = 0.into();
        let err = serde_json::from_value::<GameState>(zero_turn).unwrap_err();
        assert!(err.to_string().contains("turn numbers start at 1"));

        let outcome = Outcome::from_stores(PlayerMap::with_value(0));
        let mut over_with_stones = fresh.clone();
        over_with_stones["phase"] = serde_json::to_value(Phase::GameOver(outcome)).unwrap();
        let err = serde_json::from_value::<GameState>(over_with_stones).unwrap_err();
        assert!(err.to_string().contains("pits still hold stones"));

        let mut swept = GameState::from_board(
            Board::from_slots([0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 18]).unwrap(),
            Player::One,
        );
        let outcome = swept.check_winner().unwrap();
        let mut wrong_winner = serde_json::to_value(&swept).unwrap();
        let flipped = Outcome {
            result: GameResult::Winner(Player::Two),
            ..outcome
        };
        wrong_winner["phase"] = serde_json::to_value(Phase::GameOver(flipped)).unwrap();
        let err = serde_json::from_value::<GameState>(wrong_winner).unwrap_err();
        assert!(err.to_string().contains("does not match the stores"));

        let mut overfull = fresh;
        overfull["board"][PLAYER_1_STORE] = u32::MAX.into();
        assert!(serde_json::from_value::<GameState>(overfull).is_err());
    }
}
