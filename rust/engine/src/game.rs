use std::collections::HashSet;

use tracing::info;

use crate::config::GameConfig;
use crate::errors::{ConfigError, GameError};
use crate::logger::TurnRecord;
use crate::player::{Control, PlayerState};
use crate::roller::DiceSource;
use crate::turn::{play_turn, DecisionProvider, Seat};

/// Table state: seats in fixed order, thresholds and the final-round marker.
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<PlayerState>,
    max_score: u32,
    entry_score: u32,
    /// Seat whose turn closes the game once the last round has started
    final_player: Option<usize>,
    last_round: bool,
    current: usize,
    finished: bool,
    turns_played: u32,
}

/// What committing a turn did to the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CommitOutcome {
    pub seat: usize,
    /// Points actually added to the player's score
    pub added: u32,
    /// The turn cleared the entry threshold for the first time
    pub entered_now: bool,
    /// This turn started the last round
    pub triggered_last_round: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn new(
        players: Vec<PlayerState>,
        max_score: u32,
        entry_score: u32,
    ) -> Result<Self, ConfigError> {
        if players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if max_score == 0 {
            return Err(ConfigError::InvalidThreshold(
                "max_score must be > 0".into(),
            ));
        }
        let mut seen = HashSet::new();
        for p in &players {
            if !seen.insert(p.name()) {
                return Err(ConfigError::DuplicatePlayer(p.name().to_string()));
            }
        }
        Ok(Self {
            players,
            max_score,
            entry_score,
            final_player: None,
            last_round: false,
            current: 0,
            finished: false,
            turns_played: 0,
        })
    }

    /// Build a fresh table from a validated configuration record.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let players = config
            .validate()?
            .into_iter()
            .map(|(name, control)| PlayerState::new(name, control))
            .collect();
        Self::new(players, config.max_score, config.entry_score)
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }
    pub fn max_score(&self) -> u32 {
        self.max_score
    }
    pub fn entry_score(&self) -> u32 {
        self.entry_score
    }
    pub fn current_seat(&self) -> usize {
        self.current
    }
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current]
    }
    pub fn final_player(&self) -> Option<&PlayerState> {
        self.final_player.map(|i| &self.players[i])
    }
    pub fn last_round(&self) -> bool {
        self.last_round
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Player name and score, in seating order.
    pub fn score_table(&self) -> Vec<(&str, u32)> {
        self.players.iter().map(|p| (p.name(), p.score())).collect()
    }

    /// Everyone holding the top score. Several players means a shared win.
    /// Empty until the game is over.
    pub fn winners(&self) -> Vec<&PlayerState> {
        if !self.finished {
            return Vec::new();
        }
        self.leaders()
    }

    /// Everyone currently holding the top score.
    pub fn leaders(&self) -> Vec<&PlayerState> {
        let best = self.players.iter().map(|p| p.score()).max().unwrap_or(0);
        self.players.iter().filter(|p| p.score() == best).collect()
    }

    /// Apply a finished turn's score for the current seat and move on.
    ///
    /// A player who has not entered yet must score strictly more than the
    /// entry threshold in one turn, otherwise the turn counts for nothing.
    /// The first player to reach the max score starts the last round: the
    /// game ends after the seat just before them has played once more.
    pub fn commit_turn(&mut self, turn_score: u32) -> Result<CommitOutcome, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        let seat = self.current;
        let entry_score = self.entry_score;
        let player = &mut self.players[seat];

        let mut added = 0;
        let mut entered_now = false;
        if player.entered() {
            player.add_points(turn_score);
            added = turn_score;
        } else if turn_score > entry_score {
            player.enter();
            player.add_points(turn_score);
            added = turn_score;
            entered_now = true;
        }
        let score = player.score();
        self.turns_played += 1;

        let mut triggered_last_round = false;
        if self.final_player == Some(seat) {
            self.finished = true;
            info!(
                turns = self.turns_played,
                leaders = ?self.leaders().iter().map(|p| p.name()).collect::<Vec<_>>(),
                "game over"
            );
        } else if score >= self.max_score && !self.last_round {
            let previous = (seat + self.players.len() - 1) % self.players.len();
            self.final_player = Some(previous);
            self.last_round = true;
            triggered_last_round = true;
            info!(
                player = self.players[seat].name(),
                score,
                final_player = self.players[previous].name(),
                "last round"
            );
        }

        if !self.finished {
            self.current = (seat + 1) % self.players.len();
        }

        Ok(CommitOutcome {
            seat,
            added,
            entered_now,
            triggered_last_round,
            game_over: self.finished,
        })
    }
}

/// A turn as played and committed.
#[derive(Debug, Clone)]
pub struct PlayedTurn {
    pub record: TurnRecord,
    pub outcome: CommitOutcome,
}

/// Runs turns against the table: one dice source for the game and one
/// decision provider per seat.
pub struct Game<'a> {
    state: GameState,
    dice: &'a mut dyn DiceSource,
    providers: Vec<Box<dyn DecisionProvider + 'a>>,
}

impl<'a> Game<'a> {
    pub fn new(
        state: GameState,
        dice: &'a mut dyn DiceSource,
        providers: Vec<Box<dyn DecisionProvider + 'a>>,
    ) -> Result<Self, GameError> {
        if providers.len() != state.players().len() {
            return Err(GameError::ProviderCount {
                expected: state.players().len(),
                actual: providers.len(),
            });
        }
        Ok(Self {
            state,
            dice,
            providers,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play the current seat's turn and commit it.
    pub fn play_turn(&mut self) -> Result<PlayedTurn, GameError> {
        if self.state.is_finished() {
            return Err(GameError::GameOver);
        }
        let seat_index = self.state.current_seat();
        let player = self.state.current_player();
        let seat = Seat {
            player: player.name(),
            score: player.score(),
            entered: player.entered(),
            entry_score: self.state.entry_score(),
            max_score: self.state.max_score(),
        };
        let provider = &mut self.providers[seat_index];
        let record = play_turn(&mut *self.dice, provider.as_mut(), seat)?;
        info!(
            player = %record.player,
            score = record.score,
            busted = record.busted,
            "turn"
        );
        let outcome = self.state.commit_turn(record.score)?;
        Ok(PlayedTurn { record, outcome })
    }

    /// Play until the game ends, calling `on_turn` after each commit.
    ///
    /// # Errors
    ///
    /// [`GameError::TurnLimit`] if the game is still running after
    /// `max_turns` turns, plus anything a turn or `on_turn` reports.
    /// Callbacks report their own failures as [`GameError::Observer`].
    pub fn play_to_end<F>(&mut self, max_turns: u32, mut on_turn: F) -> Result<(), GameError>
    where
        F: FnMut(&GameState, &PlayedTurn) -> Result<(), GameError>,
    {
        let mut played = 0;
        while !self.state.is_finished() {
            if played >= max_turns {
                return Err(GameError::TurnLimit(max_turns));
            }
            let turn = self.play_turn()?;
            on_turn(&self.state, &turn)?;
            played += 1;
        }
        Ok(())
    }
}

/// Seat list for a set of controls, used when building tables by hand.
pub fn seats<I, S>(players: I) -> Vec<PlayerState>
where
    I: IntoIterator<Item = (S, Control)>,
    S: Into<String>,
{
    players
        .into_iter()
        .map(|(name, control)| PlayerState::new(name, control))
        .collect()
}
