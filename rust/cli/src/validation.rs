//! Input parsing and validation for interactive commands.
//!
//! Prompts accept `q`/`quit` everywhere; everything else is parsed into a
//! [`ParseResult`] so the caller can re-prompt with the message.

use farkell_engine::config::{DiceInput, PlayerMode};
use farkell_engine::dice::parse_dice;
use farkell_engine::player::Strategy;

/// Outcome of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// Well-formed answer
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit")
}

/// Parse a yes/no answer (case-insensitive).
///
/// ```rust
/// # use farkell_cli::validation::{parse_yes_no, ParseResult};
/// assert_eq!(parse_yes_no("Y"), ParseResult::Value(true));
/// assert_eq!(parse_yes_no("no"), ParseResult::Value(false));
/// assert_eq!(parse_yes_no("q"), ParseResult::Quit);
/// ```
pub fn parse_yes_no(input: &str) -> ParseResult<bool> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "y" | "yes" => ParseResult::Value(true),
        "n" | "no" => ParseResult::Value(false),
        s if is_quit(s) => ParseResult::Quit,
        "" => ParseResult::Invalid("Empty input (answer y or n)".to_string()),
        _ => ParseResult::Invalid(format!("Unrecognized answer '{}' (answer y or n)", input)),
    }
}

/// Parse typed dice values such as `1 1 1 2 3 4`.
///
/// Only the syntax is checked here; size and face range are validated by
/// the engine, which reports positions.
pub fn parse_dice_line(input: &str) -> ParseResult<Vec<u8>> {
    let trimmed = input.trim();
    if is_quit(&trimmed.to_lowercase()) {
        return ParseResult::Quit;
    }
    match parse_dice(trimmed) {
        Ok(values) if values.is_empty() => ParseResult::Invalid("Empty input".to_string()),
        Ok(values) => ParseResult::Value(values),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

/// Parse a comma separated strategy list, e.g. `LAZY-BANK,RANDOM`.
pub fn parse_strategy_list(input: &str) -> Result<Vec<Strategy>, String> {
    let strategies = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Strategy>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    if strategies.is_empty() {
        return Err("At least one strategy is required".to_string());
    }
    Ok(strategies)
}

/// Parse the dice mode: `REAL` for typed-in dice, `RNG` for simulated ones.
pub fn parse_dice_mode(input: &str) -> ParseResult<DiceInput> {
    let lower = input.trim().to_lowercase();
    if is_quit(&lower) {
        return ParseResult::Quit;
    }
    match lower.parse() {
        Ok(mode) => ParseResult::Value(mode),
        Err(_) => ParseResult::Invalid(format!("'{}' not understood (enter REAL or RNG)", input.trim())),
    }
}

/// Parse a score threshold as a whole number of points.
pub fn parse_points(input: &str) -> ParseResult<u32> {
    let trimmed = input.trim();
    if is_quit(&trimmed.to_lowercase()) {
        return ParseResult::Quit;
    }
    match trimmed.parse::<u32>() {
        Ok(n) => ParseResult::Value(n),
        Err(_) => ParseResult::Invalid(format!("'{}' is not a whole number of points", trimmed)),
    }
}

/// Parse who controls a player: `USER` (or `HUMAN`) for a person, `COM` for a bot.
pub fn parse_player_mode(input: &str) -> ParseResult<PlayerMode> {
    match input.trim().to_lowercase().as_str() {
        "user" | "human" => ParseResult::Value(PlayerMode::Human),
        "com" => ParseResult::Value(PlayerMode::Com),
        s if is_quit(s) => ParseResult::Quit,
        _ => ParseResult::Invalid("Unrecognised player type (enter USER or COM)".to_string()),
    }
}

pub fn parse_strategy(input: &str) -> ParseResult<Strategy> {
    let trimmed = input.trim();
    if is_quit(&trimmed.to_lowercase()) {
        return ParseResult::Quit;
    }
    match trimmed.parse() {
        Ok(s) => ParseResult::Value(s),
        Err(e) => ParseResult::Invalid(e.to_string()),
    }
}
