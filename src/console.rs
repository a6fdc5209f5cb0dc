//! Text console harness.
//!
//! Drives a game through any `RulesEngine` over a line-based reader and a
//! writer: asks for names, renders the board before every turn, reads pit
//! choices and re-prompts on bad input, and prints the final outcome.
//! The console holds no rules of its own.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::{Board, GameState, Outcome, Phase, Player};
use crate::error::InputError;
use crate::rules::RulesEngine;

/// Parse a pit choice as typed by a player.
///
/// Only plain ASCII digits are accepted: no sign, no surrounding
/// whitespace. Numbers too large for `usize` parse to `usize::MAX` so they
/// are reported as an invalid move rather than as not-a-number.
pub fn parse_pit(input: &str) -> Result<usize, InputError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(input.to_string()));
    }
    Ok(input.parse().unwrap_or(usize::MAX))
}

/// Line-oriented console bound to an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream (used by tests to inspect transcripts).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` without a newline and read one line of reply.
    ///
    /// The trailing line ending is removed; nothing else is trimmed.
    pub fn prompt(&mut self, text: &str) -> Result<String, InputError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    /// Ask a player for their display name.
    pub fn ask_name(&mut self, player: Player) -> Result<String, InputError> {
        self.prompt(&format!("{player}, please enter your name: "))
    }

    /// Print the board.
    pub fn render(&mut self, board: &Board) -> Result<(), InputError> {
        writeln!(self.output, "\nCurrent Board:")?;
        writeln!(self.output, "{board}")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Ask `player` for a pit until they name one they may sow from.
    pub fn read_move(
        &mut self,
        board: &Board,
        player: Player,
        name: &str,
    ) -> Result<usize, InputError> {
        let pits = player.pits();
        let question = format!("{name}, choose a pit ({}-{}): ", pits.start, pits.end - 1);

        loop {
            let reply = self.prompt(&question)?;
            let choice = parse_pit(&reply).and_then(|pit| {
                board
                    .validate(pit, player)
                    .map(|()| pit)
                    .map_err(InputError::InvalidMove)
            });

            match choice {
                Ok(pit) => return Ok(pit),
                Err(err) if err.is_retryable() => {
                    debug!(%player, reply = %reply, %err, "re-prompting");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Play `state` to the end.
    ///
    /// Each cycle renders the board, checks for the end of the game, then
    /// reads and applies one move. The outcome is printed exactly as
    /// `Outcome` displays it.
    pub fn run<E: RulesEngine>(
        &mut self,
        engine: &E,
        state: &mut GameState,
    ) -> Result<Outcome, InputError> {
        loop {
            self.render(state.board())?;

            if let Some(outcome) = engine.check_winner(state) {
                writeln!(self.output, "{outcome}")?;
                return Ok(outcome);
            }

            let player = match state.phase() {
                Phase::Turn(player) => player,
                Phase::GameOver(outcome) => return Ok(outcome),
            };
            let pit = self.read_move(state.board(), player, engine.config().name(player))?;
            engine
                .apply_move(state, player, pit)
                .map_err(InputError::InvalidMove)?;
        }
    }
}
