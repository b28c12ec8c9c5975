//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with the
//! layer it came from:
//!
//! ```json
//! {
//!   "max_score": {
//!     "value": 10000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```
//!
//! With `--save PATH` the resolved configuration is written as TOML instead.

use std::io::Write;
use std::path::Path;

use crate::config;
use crate::error::CliError;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading or saving fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(
    config_path: Option<&Path>,
    save: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::resolve(config_path, &config::Overrides::default())
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    if let Some(path) = save {
        config::save(&resolved.config, path)
            .map_err(|e| CliError::Config(format!("Failed to save {}: {}", path.display(), e)))?;
        writeln!(out, "Saved configuration to {}", path.display())?;
        return Ok(());
    }

    let config::ConfigResolved {
        config,
        sources,
        path,
    } = resolved;
    let display = serde_json::json!({
        "file": path.map(|p| p.display().to_string()),
        "dice_input": {
            "value": config.game.dice_input,
            "source": sources.dice_input,
        },
        "max_score": {
            "value": config.game.max_score,
            "source": sources.max_score,
        },
        "entry_score": {
            "value": config.game.entry_score,
            "source": sources.entry_score,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.game.players,
            "source": sources.players,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
