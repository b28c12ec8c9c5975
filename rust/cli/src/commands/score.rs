//! # Score Command
//!
//! Scores a single roll given on the command line and prints the breakdown.

use std::io::Write;

use farkell_engine::dice::{Hand, parse_dice};
use farkell_engine::scoring::{name_hand, score};

use crate::error::CliError;
use crate::formatters::{format_breakdown, format_dice};

/// Handle `farkell score <dice>...`.
///
/// Arguments are joined, so `1 1 1 2 3 4` and `"1,1,1,2,3,4"` both work.
pub fn handle_score_command(dice: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let joined = dice.join(" ");
    let hand = parse_dice(&joined)
        .and_then(|values| Hand::new(values).map_err(|e| e.to_string()))
        .map_err(CliError::InvalidInput)?;

    let breakdown = score(&hand);
    writeln!(out, "Dice: {}", format_dice(hand.dice()))?;
    if breakdown.is_bust() {
        writeln!(out, "  (no scoring dice)")?;
    }
    for line in format_breakdown(breakdown.entries()) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Total: {}", breakdown.total())?;
    writeln!(out, "Hand: {}", name_hand(&hand))?;
    Ok(())
}
