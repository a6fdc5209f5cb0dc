//! Rules engine trait.
//!
//! `RulesEngine` is the seam between a turn loop (the console harness, a
//! test, a benchmark) and the game rules. The loop never touches the board
//! directly; it asks the engine what is legal and lets it apply moves.

pub mod engine;

pub use engine::RulesEngine;
