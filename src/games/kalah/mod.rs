//! Kalah, the six-pit, four-stone Mancala variant.
//!
//! - Each player starts with four stones in each of their six pits
//! - A move sows every stone of one of your pits, skipping the opponent's store
//! - Landing the last stone in your own store earns another move
//! - The game ends when either side's pits are empty; remaining stones go to
//!   their owner's store and the larger store wins

mod game;

pub use game::{Kalah, KalahBuilder};
