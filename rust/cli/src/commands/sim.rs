//! Simulation command: bot-only games with a win summary.
//!
//! Every seat is a computer player. Game `i` uses seed `base + i` for the
//! dice, so a run is reproducible from `--seed`.

use std::io::Write;

use tracing::info;

use farkell_ai::create_ai;
use farkell_engine::config::{DiceInput, GameConfig, PlayerConfig};
use farkell_engine::errors::GameError;
use farkell_engine::game::{Game, GameState};
use farkell_engine::roller::RandomDice;
use farkell_engine::turn::DecisionProvider;

use crate::error::CliError;
use crate::formatters::format_score_table;
use crate::ui;
use crate::validation::parse_strategy_list;

pub const DEFAULT_PLAYERS: &str = "LAZY-BANK,RANDOM";

/// Simulated games running longer than this are counted as unfinished.
pub const SIM_TURN_LIMIT: u32 = 10_000;

#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub games: u32,
    pub seed: Option<u64>,
    /// Comma separated strategies, one seat each
    pub players: Option<String>,
    pub max_score: Option<u32>,
    pub entry_score: Option<u32>,
}

#[derive(Debug, Default)]
struct Tally {
    wins: Vec<u32>,
    shared: u32,
    unfinished: u32,
    turns: u64,
    finished: u32,
}

/// Handle the sim command.
///
/// # Errors
///
/// * `CliError::InvalidInput` for `--games 0` or a bad strategy list
/// * `CliError::Config` when the thresholds do not validate
pub fn handle_sim_command(
    opts: &SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let strategies =
        parse_strategy_list(opts.players.as_deref().unwrap_or(DEFAULT_PLAYERS))
            .map_err(CliError::InvalidInput)?;

    let defaults = GameConfig::default();
    let config = GameConfig {
        dice_input: DiceInput::Rng,
        max_score: opts.max_score.unwrap_or(defaults.max_score),
        entry_score: opts.entry_score.unwrap_or(defaults.entry_score),
        players: strategies
            .iter()
            .enumerate()
            .map(|(i, s)| PlayerConfig::com(format!("{} {}", s, i + 1), *s))
            .collect(),
        ..defaults
    };
    config.validate()?;

    let base_seed = opts.seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "sim: games={} players={} max_score={} entry_score={} seed={}",
        opts.games,
        strategies.len(),
        config.max_score,
        config.entry_score,
        base_seed
    )?;

    let mut tally = Tally {
        wins: vec![0; strategies.len()],
        ..Tally::default()
    };

    for g in 0..opts.games {
        let seed = base_seed.wrapping_add(g as u64);
        let state = GameState::from_config(&config)?;
        let mut dice = RandomDice::new_with_seed(seed);
        let providers: Vec<Box<dyn DecisionProvider>> = strategies
            .iter()
            .enumerate()
            .map(|(seat, s)| -> Box<dyn DecisionProvider> {
                create_ai(*s, seed.wrapping_add(seat as u64 + 1))
            })
            .collect();

        let mut game = Game::new(state, &mut dice, providers)?;
        match game.play_to_end(SIM_TURN_LIMIT, |_, _| Ok(())) {
            Ok(()) => {}
            Err(GameError::TurnLimit(limit)) => {
                tally.unfinished += 1;
                ui::display_warning(
                    err,
                    &format!("game {} did not finish within {} turns", g + 1, limit),
                )?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        let state = game.into_state();
        let winners = state.winners();
        info!(
            game = g + 1,
            seed,
            turns = state.turns_played(),
            winners = ?winners.iter().map(|p| p.name()).collect::<Vec<_>>(),
            "simulated game"
        );
        if winners.len() > 1 {
            tally.shared += 1;
        }
        for w in &winners {
            if let Some(i) = state.players().iter().position(|p| p.name() == w.name()) {
                tally.wins[i] += 1;
            }
        }
        tally.finished += 1;
        tally.turns += u64::from(state.turns_played());
    }

    let rows: Vec<(&str, u32)> = config
        .players
        .iter()
        .zip(&tally.wins)
        .map(|(p, w)| (p.name.as_str(), *w))
        .collect();
    writeln!(out, "Wins:")?;
    writeln!(out, "{}", format_score_table(&rows))?;
    writeln!(out, "Shared wins: {}", tally.shared)?;
    if tally.finished > 0 {
        let avg = tally.turns as f64 / f64::from(tally.finished);
        writeln!(out, "Average turns per game: {:.1}", avg)?;
    }
    if tally.unfinished > 0 {
        writeln!(out, "Unfinished games: {}", tally.unfinished)?;
    }
    Ok(())
}
