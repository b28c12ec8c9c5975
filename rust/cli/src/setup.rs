//! Interactive game setup for `farkell play --setup`.
//!
//! Asks for the dice mode, both thresholds and the seats, then checks the
//! record the same way a loaded file is checked. Every answer is re-asked
//! until it parses; `q` abandons the setup.

use std::path::PathBuf;

use farkell_engine::config::{CONFIG_VERSION, GameConfig, PlayerConfig, PlayerMode};
use farkell_engine::errors::GameError;

use crate::interactive::Console;
use crate::validation::{
    ParseResult, parse_dice_mode, parse_player_mode, parse_points, parse_strategy, parse_yes_no,
};

/// A game configuration typed in at the terminal, and where to save it.
#[derive(Debug, Clone, PartialEq)]
pub struct Setup {
    pub game: GameConfig,
    pub save_to: Option<PathBuf>,
}

/// Ask for a complete game configuration.
///
/// # Errors
///
/// [`GameError::Aborted`] when the player quits or the input ends, and
/// [`GameError::Config`] should the finished record still fail validation.
pub fn prompt_setup(console: &mut Console<'_>) -> Result<Setup, GameError> {
    console.say("Game setup (q to quit)")?;
    let dice_input = console.ask(
        "Enter REAL for real dice rolls or RNG for simulated dice: ",
        parse_dice_mode,
    )?;
    let max_score = console.ask("Enter the victory score for the game: ", |s| {
        match parse_points(s) {
            ParseResult::Value(0) => {
                ParseResult::Invalid("Victory score must be above 0".to_string())
            }
            other => other,
        }
    })?;
    let entry_score = console.ask("Enter the entry score for the game: ", |s| {
        match parse_points(s) {
            ParseResult::Value(n) if n >= max_score => ParseResult::Invalid(format!(
                "Entry score must be below the victory score {}",
                max_score
            )),
            other => other,
        }
    })?;

    let mut players: Vec<PlayerConfig> = Vec::new();
    loop {
        let taken: Vec<String> = players.iter().map(|p| p.name.clone()).collect();
        let name = console.ask("Enter the player's name: ", |s| {
            let name = s.trim();
            if name.eq_ignore_ascii_case("q") || name.eq_ignore_ascii_case("quit") {
                ParseResult::Quit
            } else if name.is_empty() {
                ParseResult::Invalid("Player name must not be empty".to_string())
            } else if taken.iter().any(|t| t == name) {
                ParseResult::Invalid(format!("{} is already seated", name))
            } else {
                ParseResult::Value(name.to_string())
            }
        })?;
        let mode = console.ask(
            "Enter USER if the player is a person or COM for a computer player: ",
            parse_player_mode,
        )?;
        let player = match mode {
            PlayerMode::Human => PlayerConfig::human(name),
            PlayerMode::Com => {
                let strategy = console.ask(
                    "Enter the strategy the bot should use (LAZY-BANK, RANDOM): ",
                    parse_strategy,
                )?;
                PlayerConfig::com(name, strategy)
            }
        };
        players.push(player);

        if !console.ask("Add another player? [y/n/q] ", parse_yes_no)? {
            break;
        }
    }

    let game = GameConfig {
        version: CONFIG_VERSION,
        dice_input,
        max_score,
        entry_score,
        players,
    };
    game.validate()?;

    let save_to = console.ask("Save this setup to a file (empty to skip): ", |s| {
        match s.trim() {
            "" => ParseResult::Value(None),
            "q" | "quit" => ParseResult::Quit,
            path => ParseResult::Value(Some(PathBuf::from(path))),
        }
    })?;

    Ok(Setup { game, save_to })
}
