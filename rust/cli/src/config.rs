//! Configuration loading for the CLI.
//!
//! Values are layered: built-in defaults, then a TOML file (path from
//! `--config` or `FARKELL_CONFIG`), then environment overrides. The source
//! of each value is tracked for `farkell cfg`. Command-line flags are applied
//! last through [`Overrides`], and only then is the record validated, so a
//! flag can repair a combination the lower layers would make invalid.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use farkell_engine::config::{DiceInput, GameConfig, PlayerConfig};
use farkell_engine::errors::ConfigError as RulesError;

use crate::io_utils::{ensure_parent_dir, read_text};

pub const CONFIG_ENV: &str = "FARKELL_CONFIG";
pub const MAX_SCORE_ENV: &str = "FARKELL_MAX_SCORE";
pub const ENTRY_SCORE_ENV: &str = "FARKELL_ENTRY_SCORE";
pub const DICE_ENV: &str = "FARKELL_DICE";
pub const SEED_ENV: &str = "FARKELL_SEED";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub game: GameConfig,
    /// Seed for simulated dice and random bots; drawn at startup when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub dice_input: ValueSource,
    pub max_score: ValueSource,
    pub entry_score: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            dice_input: ValueSource::Default,
            max_score: ValueSource::Default,
            entry_score: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
    /// File the values were read from, if any
    pub path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
    Rules(RulesError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}
impl From<RulesError> for ConfigError {
    fn from(e: RulesError) -> Self {
        ConfigError::Rules(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
            ConfigError::Rules(e) => write!(f, "{}", e),
        }
    }
}

/// On-disk shape. Every key is optional so a file can set only what it changes.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dice_input: Option<DiceInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entry_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    players: Option<Vec<PlayerConfig>>,
}

/// Layer file and environment values from the process environment.
///
/// The result is not validated yet; see [`resolve`].
pub fn load_with_sources(path: Option<&Path>) -> Result<ConfigResolved, ConfigError> {
    load_with_env(path, |key| std::env::var(key).ok())
}

/// Layer file and environment values, reading the environment through `env`.
pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    let path = path.map(Path::to_path_buf).or_else(|| env(CONFIG_ENV).map(PathBuf::from));
    if let Some(path) = &path {
        let text = read_text(path).map_err(ConfigError::Invalid)?;
        let f: FileConfig = toml::from_str(&text)?;
        if let Some(v) = f.version {
            cfg.game.version = v;
        }
        if let Some(v) = f.dice_input {
            cfg.game.dice_input = v;
            sources.dice_input = ValueSource::File;
        }
        if let Some(v) = f.max_score {
            cfg.game.max_score = v;
            sources.max_score = ValueSource::File;
        }
        if let Some(v) = f.entry_score {
            cfg.game.entry_score = v;
            sources.entry_score = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.game.players = v;
            sources.players = ValueSource::File;
        }
    }

    if let Some(v) = env(MAX_SCORE_ENV) {
        cfg.game.max_score = parse_env(MAX_SCORE_ENV, &v)?;
        sources.max_score = ValueSource::Env;
    }
    if let Some(v) = env(ENTRY_SCORE_ENV) {
        cfg.game.entry_score = parse_env(ENTRY_SCORE_ENV, &v)?;
        sources.entry_score = ValueSource::Env;
    }
    if let Some(v) = env(DICE_ENV) {
        cfg.game.dice_input = v.parse().map_err(ConfigError::Invalid)?;
        sources.dice_input = ValueSource::Env;
    }
    if let Some(v) = env(SEED_ENV) {
        cfg.seed = Some(parse_env(SEED_ENV, &v)?);
        sources.seed = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
        path,
    })
}

/// Load every layer, apply the command-line flags and validate the result.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    resolve_with_env(path, overrides, |key| std::env::var(key).ok())
}

pub fn resolve_with_env<F>(
    path: Option<&Path>,
    overrides: &Overrides,
    env: F,
) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut resolved = load_with_env(path, env)?;
    overrides.apply(&mut resolved.config)?;
    Ok(resolved)
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", key, value)))
}

/// Write the configuration as a complete TOML file.
pub fn save(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let file = FileConfig {
        version: Some(config.game.version),
        dice_input: Some(config.game.dice_input),
        max_score: Some(config.game.max_score),
        entry_score: Some(config.game.entry_score),
        seed: config.seed,
        players: Some(config.game.players.clone()),
    };
    let text = toml::to_string_pretty(&file).map_err(|e| ConfigError::Invalid(e.to_string()))?;
    ensure_parent_dir(path).map_err(ConfigError::Invalid)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub max_score: Option<u32>,
    pub entry_score: Option<u32>,
    pub dice_input: Option<DiceInput>,
    pub seed: Option<u64>,
}

impl Overrides {
    /// Write the flags over `config`, then validate the whole record.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(v) = self.max_score {
            config.game.max_score = v;
        }
        if let Some(v) = self.entry_score {
            config.game.entry_score = v;
        }
        if let Some(v) = self.dice_input {
            config.game.dice_input = v;
        }
        if let Some(v) = self.seed {
            config.seed = Some(v);
        }
        config.game.validate()?;
        Ok(())
    }
}
