//! Play Kalah in the terminal.
//! Usage: cargo run --bin mancala -- --player1 Ada --player2 Grace

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_mancala::core::DEFAULT_CONFIG_FILE;
use rust_mancala::{Console, GameConfig, KalahBuilder, Player};

/// Two-player Kalah on one terminal.
#[derive(Parser)]
#[command(name = "mancala", about = "Play two-player Kalah (Mancala) in the terminal")]
struct Cli {
    /// Name for Player 1 (prompted for if omitted)
    #[arg(long)]
    player1: Option<String>,

    /// Name for Player 2 (prompted for if omitted)
    #[arg(long)]
    player2: Option<String>,

    /// Path to a TOML configuration file; its names are used instead of
    /// prompting. Defaults to `mancala.toml` when that file exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive, overriding the config file (`RUST_LOG` wins)
    #[arg(long)]
    log_filter: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn name_flag(&self, player: Player) -> Option<&str> {
        match player {
            Player::One => self.player1.as_deref(),
            Player::Two => self.player2.as_deref(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", GameConfig::default_toml()?);
        return Ok(());
    }

    // An explicitly named file must exist; the default one is optional.
    let (mut config, names_from_file) = match &cli.config {
        Some(path) => (
            GameConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            true,
        ),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            (
                GameConfig::load_or_default(path)
                    .with_context(|| format!("failed to load config from {}", path.display()))?,
                path.exists(),
            )
        }
    };
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.as_str());
    }

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    for player in Player::ALL {
        let name = match cli.name_flag(player) {
            Some(name) => name.to_string(),
            None if names_from_file => continue,
            None => console
                .ask_name(player)
                .with_context(|| format!("failed to read a name for {player}"))?,
        };
        config = config.with_name(player, name);
    }

    let (game, mut state) = KalahBuilder::new().config(config).build();
    tracing::info!(
        player_one = game.player_name(Player::One),
        player_two = game.player_name(Player::Two),
        "starting game"
    );

    let outcome = console
        .run(&game, &mut state)
        .context("game aborted")?;
    tracing::debug!(
        moves = state.history().len(),
        winner = ?outcome.winner().map(|player| game.player_name(player)),
        %outcome,
        "session finished"
    );

    Ok(())
}
