//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use farkell_engine::config::DiceInput;

#[derive(Parser, Debug)]
#[command(
    name = "farkell",
    version,
    about = "Farkle-style dice game: play at the terminal, simulate bots, score rolls"
)]
pub struct FarkellCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// How dice values reach the game, as a command-line value.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DiceArg {
    /// Physical dice, values typed in after each throw
    Real,
    /// Simulated dice
    Rng,
}

impl From<DiceArg> for DiceInput {
    fn from(d: DiceArg) -> Self {
        match d {
            DiceArg::Real => DiceInput::Real,
            DiceArg::Rng => DiceInput::Rng,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game with the configured players
    Play {
        /// TOML configuration file (overrides FARKELL_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        max_score: Option<u32>,
        #[arg(long)]
        entry_score: Option<u32>,
        #[arg(long, value_enum)]
        dice: Option<DiceArg>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write every turn as a JSON line to this file
        #[arg(long)]
        history: Option<PathBuf>,
        /// Stop with an error if the game has not ended after this many turns
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_turns: Option<u32>,
        /// Ask for dice mode, thresholds and players before the game
        #[arg(long)]
        setup: bool,
    },
    /// Run bot-only games and report wins
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Comma separated strategies, one seat each (e.g. LAZY-BANK,RANDOM)
        #[arg(long)]
        players: Option<String>,
        #[arg(long)]
        max_score: Option<u32>,
        #[arg(long)]
        entry_score: Option<u32>,
    },
    /// Score a roll, e.g. `farkell score 1 1 1 2 3 4`
    Score {
        #[arg(required = true, num_args = 1..)]
        dice: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg {
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the resolved configuration to this TOML file
        #[arg(long)]
        save: Option<PathBuf>,
    },
}
