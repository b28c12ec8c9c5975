//! Versioned game configuration record.
//!
//! Storage format is not decided here: the record is plain serde data and
//! the CLI reads and writes it as TOML. [`GameConfig::validate`] is the
//! schema check every loaded record goes through before a game is built
//! from it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::player::{Control, Strategy};

pub const CONFIG_VERSION: u32 = 1;
pub const DEFAULT_MAX_SCORE: u32 = 10_000;
pub const DEFAULT_ENTRY_SCORE: u32 = 500;

/// How dice values reach the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceInput {
    /// Physical dice, values typed in by a person
    Real,
    /// Simulated dice
    Rng,
}

impl DiceInput {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiceInput::Real => "real",
            DiceInput::Rng => "rng",
        }
    }
}

impl std::str::FromStr for DiceInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "real" => Ok(DiceInput::Real),
            "rng" => Ok(DiceInput::Rng),
            _ => Err(format!("unknown dice input '{}' (expected real or rng)", s)),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerMode {
    Human,
    Com,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub mode: PlayerMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: PlayerMode::Human,
            strategy: None,
        }
    }

    pub fn com(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            mode: PlayerMode::Com,
            strategy: Some(strategy.as_str().to_string()),
        }
    }

    pub fn control(&self) -> Result<Control, ConfigError> {
        match (self.mode, self.strategy.as_deref()) {
            (PlayerMode::Human, None) => Ok(Control::Human),
            (PlayerMode::Human, Some(_)) => Err(ConfigError::UnexpectedStrategy(self.name.clone())),
            (PlayerMode::Com, Some(tag)) => Ok(Control::Automated(tag.parse()?)),
            (PlayerMode::Com, None) => Err(ConfigError::MissingStrategy(self.name.clone())),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub version: u32,
    pub dice_input: DiceInput,
    pub max_score: u32,
    pub entry_score: u32,
    /// Seating order
    pub players: Vec<PlayerConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            dice_input: DiceInput::Real,
            max_score: DEFAULT_MAX_SCORE,
            entry_score: DEFAULT_ENTRY_SCORE,
            players: vec![PlayerConfig::human("Player 1")],
        }
    }
}

impl GameConfig {
    /// Check the record and resolve every player's control.
    pub fn validate(&self) -> Result<Vec<(String, Control)>, ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                expected: CONFIG_VERSION,
            });
        }
        if self.max_score == 0 {
            return Err(ConfigError::InvalidThreshold(
                "max_score must be > 0".into(),
            ));
        }
        if self.entry_score >= self.max_score {
            return Err(ConfigError::InvalidThreshold(format!(
                "entry_score {} must be below max_score {}",
                self.entry_score, self.max_score
            )));
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        let mut seen = HashSet::new();
        self.players
            .iter()
            .map(|p| {
                let name = p.name.trim();
                if name.is_empty() {
                    return Err(ConfigError::EmptyPlayerName);
                }
                if !seen.insert(name.to_string()) {
                    return Err(ConfigError::DuplicatePlayer(name.to_string()));
                }
                Ok((name.to_string(), p.control()?))
            })
            .collect()
    }

    pub fn has_humans(&self) -> bool {
        self.players.iter().any(|p| p.mode == PlayerMode::Human)
    }
}
