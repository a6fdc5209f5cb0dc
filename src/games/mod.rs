//! Game implementations of `RulesEngine`.

pub mod kalah;
