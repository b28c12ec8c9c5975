use thiserror::Error;

/// Rejection of a supplied set of dice. Recoverable: the turn loop asks the
/// dice source again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiceError {
    #[error("Expected {expected} dice, got {actual}")]
    HandSize { expected: usize, actual: usize },
    #[error("Dice out of range 1-6: {}", format_bad_dice(.dice))]
    DiceRange { dice: Vec<(usize, u8)> },
}

fn format_bad_dice(dice: &[(usize, u8)]) -> String {
    dice.iter()
        .map(|(i, v)| format!("position {} = {}", i + 1, v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported config version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("Game needs at least one player")]
    NoPlayers,
    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),
    #[error("Player name must not be empty")]
    EmptyPlayerName,
    #[error("Unknown strategy '{0}' (valid: LAZY-BANK, RANDOM)")]
    UnknownStrategy(String),
    #[error("Computer player {0} needs a strategy")]
    MissingStrategy(String),
    #[error("Human player {0} cannot have a strategy")]
    UnexpectedStrategy(String),
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Decision provider returned {actual} choices for {expected} scores")]
    DecisionShape { expected: usize, actual: usize },
    #[error("Dice source has no more rolls")]
    DiceExhausted,
    #[error("Game aborted: {0}")]
    Aborted(String),
    #[error("Game did not finish within {0} turns")]
    TurnLimit(u32),
    #[error("Game is already over")]
    GameOver,
    /// Raised by a `play_to_end` callback, e.g. when turn output cannot be written.
    #[error("Turn observer failed: {0}")]
    Observer(String),
    #[error("Expected {expected} decision providers, got {actual}")]
    ProviderCount { expected: usize, actual: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
