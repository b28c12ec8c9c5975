use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Named bot strategies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Bank every scoring entry and stop after the first roll.
    #[serde(rename = "LAZY-BANK")]
    LazyBank,
    /// Every choice is a coin flip.
    #[serde(rename = "RANDOM")]
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::LazyBank, Strategy::Random];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::LazyBank => "LAZY-BANK",
            Strategy::Random => "RANDOM",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LAZY-BANK" => Ok(Strategy::LazyBank),
            "RANDOM" => Ok(Strategy::Random),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Who makes a player's decisions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Control {
    /// Prompted at the terminal.
    Human,
    /// Played by a bot running the given strategy.
    Automated(Strategy),
}

impl Control {
    pub fn is_human(&self) -> bool {
        matches!(self, Control::Human)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Human => f.write_str("human"),
            Control::Automated(s) => write!(f, "com ({})", s),
        }
    }
}

/// A seat at the table. The score only changes when a turn is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    name: String,
    control: Control,
    score: u32,
    entered: bool,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, control: Control) -> Self {
        Self {
            name: name.into(),
            control,
            score: 0,
            entered: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn control(&self) -> Control {
        self.control
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    /// Whether the player has cleared the entry threshold.
    pub fn entered(&self) -> bool {
        self.entered
    }

    pub(crate) fn enter(&mut self) {
        self.entered = true;
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
