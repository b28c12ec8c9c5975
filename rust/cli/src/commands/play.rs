//! # Play Command
//!
//! Runs a full game from the resolved configuration. Human seats answer
//! prompts on the input stream, computer seats use their strategy. With
//! `dice_input = real` the dice values are typed in after each throw.
//! `--setup` asks for the whole table at the terminal first.
//!
//! After each turn the score table is printed; at the end the winner, or
//! everyone sharing the top score.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::info;

use farkell_ai::create_ai;
use farkell_engine::config::DiceInput;
use farkell_engine::errors::GameError;
use farkell_engine::game::{Game, GameState, PlayedTurn};
use farkell_engine::logger::TurnLogger;
use farkell_engine::player::Control;
use farkell_engine::roller::{DiceSource, RandomDice};
use farkell_engine::turn::DecisionProvider;

use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::formatters::{
    format_breakdown, format_roll, format_roll_result, format_score_table, format_winners,
};
use crate::interactive::{Console, HumanDecider, RealDice, SharedConsole};
use crate::setup::prompt_setup;

/// Without `--max-turns` a game may run this long before it is called off.
pub const DEFAULT_MAX_TURNS: u32 = 100_000;

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub history: Option<PathBuf>,
    pub max_turns: Option<u32>,
    /// Ask for dice mode, thresholds and players before the game
    pub setup: bool,
}

/// Handle the play command.
///
/// # Errors
///
/// * `CliError::Config` for an invalid configuration
/// * `CliError::Interrupted` when a player quits or the input ends mid-game
/// * `CliError::Engine` if the game does not finish within the turn limit
pub fn handle_play_command(
    opts: &PlayOptions,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = config::load_with_sources(opts.config.as_deref())
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?
        .config;
    let console = Console::new(stdin, out).shared();

    if opts.setup {
        let setup = prompt_setup(&mut console.borrow_mut())?;
        cfg.game = setup.game;
        if let Some(path) = setup.save_to {
            config::save(&cfg, &path).map_err(|e| {
                CliError::Config(format!("Failed to save {}: {}", path.display(), e))
            })?;
            writeln!(console.borrow_mut().out(), "Saved configuration to {}", path.display())?;
        }
    }
    // Flags win over file, environment and setup answers.
    opts.overrides
        .apply(&mut cfg)
        .map_err(|e| CliError::Config(e.to_string()))?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let state = GameState::from_config(&cfg.game)?;
    let max_turns = opts.max_turns.unwrap_or(DEFAULT_MAX_TURNS);

    writeln!(
        console.borrow_mut().out(),
        "play: players={} max_score={} entry_score={} dice={} seed={}",
        state.players().len(),
        state.max_score(),
        state.entry_score(),
        cfg.game.dice_input.as_str(),
        seed
    )?;

    let mut history = match &opts.history {
        Some(path) => Some(TurnLogger::create(path, &format!("{:016x}", seed))?),
        None => None,
    };

    let mut dice: Box<dyn DiceSource + '_> = match cfg.game.dice_input {
        DiceInput::Rng => Box::new(RandomDice::new_with_seed(seed)),
        DiceInput::Real => Box::new(RealDice::new(console.clone())),
    };

    let mut providers: Vec<Box<dyn DecisionProvider + '_>> = Vec::new();
    for (seat, p) in state.players().iter().enumerate() {
        match p.control() {
            Control::Human => {
                providers.push(Box::new(HumanDecider::new(console.clone(), p.name())))
            }
            Control::Automated(strategy) => {
                providers.push(create_ai(strategy, seed.wrapping_add(seat as u64 + 1)))
            }
        }
    }

    let mut game = Game::new(state, dice.as_mut(), providers)?;
    write_turn_header(&console, game.state())?;
    let outcome = game.play_to_end(max_turns, |state, turn| {
        let observer_failure = |e: std::io::Error| GameError::Observer(e.to_string());
        if let Some(logger) = history.as_mut() {
            logger.write(&turn.record).map_err(observer_failure)?;
        }
        report_turn(state, turn, &console).map_err(observer_failure)?;
        if !state.is_finished() {
            write_turn_header(&console, state).map_err(observer_failure)?;
        }
        Ok(())
    });

    let mut console = console.borrow_mut();
    let out = console.out();
    match outcome {
        Ok(()) => {
            let state = game.state();
            writeln!(out, "Game over after {} turns.", state.turns_played())?;
            writeln!(out, "{}", format_score_table(&state.score_table()))?;
            let winners: Vec<&str> = state.winners().into_iter().map(|p| p.name()).collect();
            writeln!(out, "{}", format_winners(&winners))?;
            Ok(())
        }
        Err(GameError::Aborted(reason)) => {
            writeln!(out, "Game stopped before the end ({}).", reason)?;
            writeln!(out, "{}", format_score_table(&game.state().score_table()))?;
            Err(CliError::Interrupted(reason))
        }
        Err(e) => Err(e.into()),
    }
}

fn write_turn_header(console: &SharedConsole<'_>, state: &GameState) -> std::io::Result<()> {
    let player = state.current_player();
    writeln!(
        console.borrow_mut().out(),
        "\n--- {} ({}) score {} ---",
        player.name(),
        player.control(),
        player.score()
    )
}

fn report_turn(
    state: &GameState,
    turn: &PlayedTurn,
    console: &SharedConsole<'_>,
) -> std::io::Result<()> {
    let mut console = console.borrow_mut();
    let out = console.out();
    let player = &state.players()[turn.outcome.seat];
    let record = &turn.record;

    // Humans already saw every scored roll while deciding.
    let shown: Vec<_> = if player.control().is_human() {
        record.rolls.iter().filter(|r| r.is_bust()).collect()
    } else {
        record.rolls.iter().collect()
    };
    for roll in shown {
        writeln!(out, "{}", format_roll(roll))?;
        if roll.breakdown.len() > 1 {
            for line in format_breakdown(&roll.breakdown) {
                writeln!(out, "{}", line)?;
            }
        }
        writeln!(out, "{}", format_roll_result(roll))?;
    }

    if record.score > 0 && turn.outcome.added == 0 {
        writeln!(
            out,
            "{} scored {} but needs more than {} to get on the board.",
            record.player,
            record.score,
            state.entry_score()
        )?;
    } else {
        writeln!(out, "{} scores {} this turn.", record.player, turn.outcome.added)?;
    }
    if turn.outcome.entered_now {
        writeln!(out, "{} is on the board.", record.player)?;
    }
    if turn.outcome.triggered_last_round {
        info!(player = %record.player, "last round announced");
        writeln!(
            out,
            "{} reached {}! Everyone else gets one more turn.",
            record.player,
            state.max_score()
        )?;
    }
    writeln!(out, "{}", format_score_table(&state.score_table()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bots_config(dir: &tempfile::TempDir, extra: &str) -> PathBuf {
        let path = dir.path().join("bots.toml");
        let text = format!(
            "dice_input = \"rng\"\nmax_score = 2000\nentry_score = 300\n{}\n\
             [[players]]\nname = \"Lazy\"\nmode = \"com\"\nstrategy = \"LAZY-BANK\"\n\n\
             [[players]]\nname = \"Coin\"\nmode = \"com\"\nstrategy = \"RANDOM\"\n",
            extra
        );
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_play_bots_to_the_end() {
        let dir = tempfile::tempdir().unwrap();
        let opts = PlayOptions {
            config: Some(bots_config(&dir, "seed = 7")),
            ..PlayOptions::default()
        };
        let mut out = Vec::new();
        let mut input = Cursor::new(b"");

        handle_play_command(&opts, &mut out, &mut input).expect("game finishes");

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("play: players=2 max_score=2000 entry_score=300 dice=rng seed=7"));
        assert!(text.contains("--- Lazy (com (LAZY-BANK)) score 0 ---"));
        assert!(text.contains("Game over after"));
        assert!(text.contains("Winner: ") || text.contains("Shared win: "));
    }

    #[test]
    fn test_play_is_reproducible_with_seed() {
        let dir = tempfile::tempdir().unwrap();
        let opts = PlayOptions {
            config: Some(bots_config(&dir, "")),
            overrides: Overrides {
                seed: Some(99),
                ..Overrides::default()
            },
            ..PlayOptions::default()
        };
        let run = || {
            let mut out = Vec::new();
            let mut input = Cursor::new(b"");
            handle_play_command(&opts, &mut out, &mut input).unwrap();
            String::from_utf8(out).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_play_turn_limit() {
        let dir = tempfile::tempdir().unwrap();
        let opts = PlayOptions {
            config: Some(bots_config(&dir, "seed = 1")),
            max_turns: Some(1),
            ..PlayOptions::default()
        };
        let mut out = Vec::new();
        let mut input = Cursor::new(b"");
        let res = handle_play_command(&opts, &mut out, &mut input);
        assert!(matches!(res, Err(CliError::Engine(ref m)) if m.contains("1 turns")));
    }

    #[test]
    fn test_play_human_quits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("human.toml");
        std::fs::write(&path, "dice_input = \"real\"\n").unwrap();
        let opts = PlayOptions {
            config: Some(path),
            ..PlayOptions::default()
        };
        let mut out = Vec::new();
        let mut input = Cursor::new(b"1 1 1 2 3 4\nq\n");

        let res = handle_play_command(&opts, &mut out, &mut input);
        assert!(matches!(res, Err(CliError::Interrupted(ref m)) if m == "quit"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rolled [1 1 1 2 3 4]: THREE OF A KIND"));
        assert!(text.contains("Banked 300 (only score)"));
        assert!(text.contains("Game stopped before the end (quit)."));
    }
}
