//! Text formatting for dice, scoring breakdowns, score tables and results.
//!
//! Pure functions; the commands decide where the text goes.
//!
//! ## Example
//!
//! ```rust
//! use farkell_cli::formatters::{format_dice, format_entry};
//! use farkell_engine::scoring::Score;
//!
//! assert_eq!(format_dice(&[1, 1, 1, 2, 3, 4]), "[1 1 1 2 3 4]");
//! assert_eq!(format_entry(&Score::new(300, vec![1, 1, 1])), "300 [1 1 1] THREE OF A KIND");
//! ```

use farkell_engine::logger::RollRecord;
use farkell_engine::scoring::{Score, name_score};

pub fn format_dice(dice: &[u8]) -> String {
    let faces: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
    format!("[{}]", faces.join(" "))
}

/// One breakdown entry: points, dice and name.
pub fn format_entry(entry: &Score) -> String {
    format!(
        "{} {} {}",
        entry.value,
        format_dice(&entry.dice),
        name_score(entry)
    )
}

/// Numbered breakdown lines, one per entry, in breakdown order.
pub fn format_breakdown(entries: &[Score]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}) {}", i + 1, format_entry(e)))
        .collect()
}

/// Headline for a roll, e.g. `Rolled [1 1 1 2 3 4]: THREE OF A KIND`.
pub fn format_roll(roll: &RollRecord) -> String {
    format!("Rolled {}: {}", format_dice(&roll.dice), roll.name)
}

/// Summary of what a roll added, or the bust notice.
pub fn format_roll_result(roll: &RollRecord) -> String {
    if roll.is_bust() {
        return "Bust! The turn scores nothing.".to_string();
    }
    let mut line = format!("Banked {}", roll.points);
    if roll.auto_banked {
        line.push_str(" (only score)");
    }
    if roll.hot_dice {
        line.push_str(", hot dice: six fresh dice");
    }
    line
}

/// Score table with names left-aligned to the longest name.
pub fn format_score_table(rows: &[(&str, u32)]) -> String {
    let width = rows.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, score)| format!("  {:<width$}  {:>6}", name, score, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_winners(names: &[&str]) -> String {
    match names {
        [] => "No winner".to_string(),
        [one] => format!("Winner: {}", one),
        many => format!("Shared win: {}", many.join(", ")),
    }
}
