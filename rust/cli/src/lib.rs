//! # farkell CLI Library
//!
//! Command-line front end for the farkell dice game engine: play at the
//! terminal, run bot simulations, score a single roll and inspect the
//! resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and dispatches to a subcommand. Use
//! [`run_with_input`] to drive interactive games from any reader.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = farkell_cli::run(["farkell", "score", "1", "1", "1", "5", "2", "3"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Total: 350"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game with human and computer players (`--setup` asks for the table first)
//! - `sim`: Run bot-only games and report wins per seat
//! - `score`: Break a roll down into its scoring entries
//! - `cfg`: Show the resolved configuration, optionally save it

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod interactive;
pub mod io_utils;
pub mod logging;
pub mod setup;
pub mod ui;
pub mod validation;

use cli::{Commands, FarkellCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_play_command, handle_score_command,
    handle_sim_command,
};
use config::Overrides;

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "score", "cfg"];

/// Main entry point. Interactive input comes from the process stdin.
///
/// Returns the exit code: `0` on success, `2` for errors and `130` when a
/// game was stopped before it finished.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    run_with_input(args, &mut lock, out, err)
}

/// Like [`run`], reading interactive answers and typed dice from `input`.
///
/// ```
/// use std::io::Cursor;
///
/// let cfg = std::env::temp_dir().join("farkell-doc-quit.toml");
/// std::fs::write(&cfg, "dice_input = \"real\"\n").unwrap();
/// let mut input = Cursor::new("q\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let code = farkell_cli::run_with_input(
///     ["farkell", "play", "--config", cfg.to_str().unwrap()],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 130);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FarkellCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            config,
            max_score,
            entry_score,
            dice,
            seed,
            history,
            max_turns,
            setup,
        } => {
            let opts = PlayOptions {
                config,
                overrides: Overrides {
                    max_score,
                    entry_score,
                    dice_input: dice.map(Into::into),
                    seed,
                },
                history,
                max_turns,
                setup,
            };
            handle_play_command(&opts, out, input)
        }
        Commands::Sim {
            games,
            seed,
            players,
            max_score,
            entry_score,
        } => {
            let opts = SimOptions {
                games,
                seed,
                players,
                max_score,
                entry_score,
            };
            handle_sim_command(&opts, out, err)
        }
        Commands::Score { dice } => handle_score_command(&dice, out),
        Commands::Cfg { config, save } => {
            handle_cfg_command(config.as_deref(), save.as_deref(), out)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut report = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "farkell dice game CLI")?;
        writeln!(err, "Usage: farkell <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: farkell --help")
    };
    let _ = report();
    exit_code::ERROR
}
