//! Shared helpers for the CLI integration tests.
//!
//! Commands are driven through `farkell_cli::run_with_input` so stdin can be
//! scripted, and configuration files live in a `tempfile` directory that is
//! cleaned up on drop.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

#[derive(Debug)]
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str], input: &str) -> CliOutput {
    let mut argv = vec!["farkell"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = farkell_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(err).expect("stderr is utf-8"),
    }
}

pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).expect("write config");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Two bots on short thresholds so games end quickly.
pub const BOTS_TOML: &str = r#"
dice_input = "rng"
max_score = 2000
entry_score = 300

[[players]]
name = "Lazy"
mode = "com"
strategy = "LAZY-BANK"

[[players]]
name = "Coin"
mode = "com"
strategy = "RANDOM"
"#;

/// One human typing in real dice.
pub const HUMAN_TOML: &str = r#"
dice_input = "real"
max_score = 1000
entry_score = 0

[[players]]
name = "Ada"
mode = "human"
"#;
