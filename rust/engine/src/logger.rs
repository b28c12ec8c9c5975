use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::Score;

/// What happened on one roll within a turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Dice rolled, ascending
    pub dice: Vec<u8>,
    /// Scoring entries offered for the roll (empty on a bust)
    pub breakdown: Vec<Score>,
    /// Display name of the roll, e.g. "THREE OF A KIND"
    pub name: String,
    /// Bank choice per breakdown entry
    pub banked: Vec<bool>,
    /// Points added to the turn bank by this roll
    pub points: u32,
    /// Single-entry roll banked without asking
    #[serde(default)]
    pub auto_banked: bool,
    /// All available dice were banked and six fresh dice granted
    #[serde(default)]
    pub hot_dice: bool,
}

impl RollRecord {
    pub fn is_bust(&self) -> bool {
        self.breakdown.is_empty()
    }
}

/// Complete record of one player turn. Serialized as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Identifier assigned by the logger (format: GAMEID-NNNNNN)
    #[serde(default)]
    pub turn_id: Option<String>,
    /// Player name
    pub player: String,
    /// Rolls in the order they happened
    pub rolls: Vec<RollRecord>,
    /// Points the turn produced (0 on a bust)
    pub score: u32,
    /// Turn ended on a roll with no score
    pub busted: bool,
    /// Timestamp when the turn was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl TurnRecord {
    pub fn last_roll(&self) -> Option<&RollRecord> {
        self.rolls.last()
    }
}

pub fn format_turn_id(game_id: &str, seq: u32) -> String {
    format!("{}-{:06}", game_id, seq)
}

/// Appends turn records to a JSONL file.
pub struct TurnLogger {
    writer: Option<BufWriter<File>>,
    game_id: String,
    seq: u32,
}

impl TurnLogger {
    pub fn create<P: AsRef<Path>>(path: P, game_id: &str) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            game_id: game_id.to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids.
    pub fn without_file(game_id: &str) -> Self {
        Self {
            writer: None,
            game_id: game_id.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_turn_id(&self.game_id, self.seq)
    }

    /// Write one record, filling in `turn_id` and `ts` when missing.
    pub fn write(&mut self, record: &TurnRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.turn_id.is_none() {
            rec.turn_id = Some(self.next_id());
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
