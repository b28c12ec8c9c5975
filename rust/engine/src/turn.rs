//! The turn state machine.
//!
//! `ROLLING -> SCORING -> (AUTO_BANK | DECISION) -> (CONTINUE -> ROLLING | STOP -> ENDED)`,
//! with `SCORING -> BUST -> ENDED(0)`.
//!
//! [`TurnState::resolve`] is the pure transition for one scored roll;
//! [`play_turn`] drives it against a [`DiceSource`] and a [`DecisionProvider`].

use tracing::{debug, info, warn};

use crate::dice::{Hand, FULL_HAND};
use crate::errors::GameError;
use crate::logger::{RollRecord, TurnRecord};
use crate::roller::DiceSource;
use crate::scoring::{name_hand, score, ScoringBreakdown};

/// Dice left to roll and points banked so far this turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnState {
    available_dice: usize,
    bank: u32,
    rolls: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of resolving one scored roll.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    /// Nothing scored: the turn is over and its bank is lost.
    Bust,
    Scored {
        next: TurnState,
        /// Points added to the bank by this roll
        banked: u32,
        /// Dice set aside by this roll
        dice_used: usize,
        /// Every available die was banked; `next` has six dice again
        hot_dice: bool,
    },
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            available_dice: FULL_HAND,
            bank: 0,
            rolls: 0,
        }
    }

    pub fn available_dice(&self) -> usize {
        self.available_dice
    }
    pub fn bank(&self) -> u32 {
        self.bank
    }
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Apply the bank choices for a scored roll.
    ///
    /// `choices[i]` banks `breakdown.entries()[i]`; unbanked entries are
    /// dropped and their dice go back into the next roll.
    ///
    /// # Errors
    ///
    /// [`GameError::DecisionShape`] when there is not exactly one choice per entry.
    ///
    /// ```
    /// use farkell_engine::dice::Hand;
    /// use farkell_engine::scoring::score;
    /// use farkell_engine::turn::{Transition, TurnState};
    ///
    /// let b = score(&Hand::new(vec![1, 5, 2, 3, 4, 4]).unwrap());
    /// match TurnState::new().resolve(&b, &[false, true]).unwrap() {
    ///     Transition::Scored { next, banked, .. } => {
    ///         assert_eq!(banked, 100);
    ///         assert_eq!(next.available_dice(), 5);
    ///     }
    ///     Transition::Bust => unreachable!(),
    /// }
    /// ```
    pub fn resolve(
        self,
        breakdown: &ScoringBreakdown,
        choices: &[bool],
    ) -> Result<Transition, GameError> {
        if breakdown.is_bust() {
            return Ok(Transition::Bust);
        }
        if choices.len() != breakdown.len() {
            return Err(GameError::DecisionShape {
                expected: breakdown.len(),
                actual: choices.len(),
            });
        }

        let (banked, dice_used) = breakdown
            .iter()
            .zip(choices)
            .filter(|(_, keep)| **keep)
            .fold((0u32, 0usize), |(pts, n), (s, _)| {
                (pts + s.value, n + s.dice.len())
            });

        let hot_dice = dice_used == self.available_dice;
        let available_dice = if hot_dice {
            FULL_HAND
        } else {
            self.available_dice.saturating_sub(dice_used)
        };

        Ok(Transition::Scored {
            next: TurnState {
                available_dice,
                bank: self.bank + banked,
                rolls: self.rolls + 1,
            },
            banked,
            dice_used,
            hot_dice,
        })
    }

    /// End the turn by choice, keeping the bank.
    pub fn stop(self) -> u32 {
        self.bank
    }
}

/// What a decision provider sees when asked to choose.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    pub player: &'a str,
    /// Cumulative game score before this turn
    pub score: u32,
    pub entered: bool,
    pub entry_score: u32,
    pub max_score: u32,
    /// Bank and dice before the pending choice
    pub state: TurnState,
    /// The roll being decided on, or just resolved
    pub roll: Option<&'a RollRecord>,
}

/// The player's side of a turn: bank choices and continue/stop.
pub trait DecisionProvider {
    /// One bank (`true`) / reroll (`false`) choice per breakdown entry, in
    /// order. Only asked when the breakdown has two or more entries.
    fn choose_banks(
        &mut self,
        ctx: &TurnContext<'_>,
        breakdown: &ScoringBreakdown,
    ) -> Result<Vec<bool>, GameError>;

    /// Roll again (`true`) or stop and keep the bank (`false`).
    fn keep_rolling(&mut self, ctx: &TurnContext<'_>) -> Result<bool, GameError>;

    fn name(&self) -> &str;
}

/// Player details the turn needs for its decision context.
#[derive(Debug, Clone, Copy)]
pub struct Seat<'a> {
    pub player: &'a str,
    pub score: u32,
    pub entered: bool,
    pub entry_score: u32,
    pub max_score: u32,
}

impl<'a> Seat<'a> {
    fn context<'b>(&self, state: TurnState, roll: Option<&'b RollRecord>) -> TurnContext<'b>
    where
        'a: 'b,
    {
        TurnContext {
            player: self.player,
            score: self.score,
            entered: self.entered,
            entry_score: self.entry_score,
            max_score: self.max_score,
            state,
            roll,
        }
    }
}

/// Roll until validated, asking the source again after each rejection.
fn roll_hand(dice: &mut dyn DiceSource, count: usize) -> Result<Hand, GameError> {
    loop {
        let values = dice.supply(count)?;
        match Hand::with_size(count, values) {
            Ok(hand) => return Ok(hand),
            Err(e) => {
                warn!(error = %e, count, "rejected dice");
                dice.reject(&e);
            }
        }
    }
}

/// Play one turn to completion.
///
/// Returns the full record; `score` is 0 when the turn busted.
///
/// # Errors
///
/// Anything the dice source or decision provider reports, and
/// [`GameError::DecisionShape`] when the provider answers with the wrong
/// number of bank choices. Invalid dice are never an error here.
pub fn play_turn(
    dice: &mut dyn DiceSource,
    decider: &mut dyn DecisionProvider,
    seat: Seat<'_>,
) -> Result<TurnRecord, GameError> {
    let mut state = TurnState::new();
    let mut rolls: Vec<RollRecord> = Vec::new();

    loop {
        let hand = roll_hand(dice, state.available_dice())?;
        let breakdown = score(&hand);
        let mut record = RollRecord {
            dice: hand.dice().to_vec(),
            breakdown: breakdown.entries().to_vec(),
            name: name_hand(&hand),
            banked: Vec::new(),
            points: 0,
            auto_banked: false,
            hot_dice: false,
        };
        debug!(player = seat.player, dice = ?record.dice, name = %record.name, "roll");

        let choices = match breakdown.len() {
            0 => Vec::new(),
            1 => {
                record.auto_banked = true;
                vec![true]
            }
            _ => {
                let ctx = seat.context(state, Some(&record));
                let choices = decider.choose_banks(&ctx, &breakdown)?;
                debug!(player = seat.player, ?choices, "bank choices");
                choices
            }
        };

        match state.resolve(&breakdown, &choices)? {
            Transition::Bust => {
                info!(player = seat.player, lost = state.bank(), "bust");
                rolls.push(record);
                return Ok(TurnRecord {
                    turn_id: None,
                    player: seat.player.to_string(),
                    rolls,
                    score: 0,
                    busted: true,
                    ts: None,
                });
            }
            Transition::Scored {
                next,
                banked,
                hot_dice,
                ..
            } => {
                if hot_dice {
                    info!(player = seat.player, bank = next.bank(), "hot dice");
                }
                record.banked = choices;
                record.points = banked;
                record.hot_dice = hot_dice;
                state = next;
            }
        }

        rolls.push(record);
        let ctx = seat.context(state, rolls.last());
        if !decider.keep_rolling(&ctx)? {
            let points = state.stop();
            debug!(player = seat.player, points, rolls = state.rolls(), "stop");
            return Ok(TurnRecord {
                turn_id: None,
                player: seat.player.to_string(),
                rolls,
                score: points,
                busted: false,
                ts: None,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(v: &[u8]) -> ScoringBreakdown {
        score(&Hand::new(v.to_vec()).unwrap())
    }

    #[test]
    fn bust_has_no_next_state() {
        let t = TurnState::new().resolve(&breakdown(&[2, 3, 4, 6]), &[]);
        assert_eq!(t, Ok(Transition::Bust));
    }

    #[test]
    fn wrong_choice_count_is_fatal() {
        let b = breakdown(&[1, 5, 2, 3, 4, 4]);
        assert_eq!(
            TurnState::new().resolve(&b, &[true]),
            Err(GameError::DecisionShape {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn banking_everything_resets_dice() {
        let b = breakdown(&[1, 1, 1, 5, 2, 3]);
        match TurnState::new().resolve(&b, &[true, true]).unwrap() {
            Transition::Scored { hot_dice, .. } => assert!(!hot_dice),
            Transition::Bust => panic!("expected a score"),
        }

        let b = breakdown(&[2, 2, 2, 3, 3, 3]);
        match TurnState::new().resolve(&b, &[true]).unwrap() {
            Transition::Scored {
                next,
                hot_dice,
                dice_used,
                ..
            } => {
                assert!(hot_dice);
                assert_eq!(dice_used, 6);
                assert_eq!(next.available_dice(), 6);
                assert_eq!(next.bank(), 2500);
            }
            Transition::Bust => panic!("expected a score"),
        }
    }

    #[test]
    fn banking_nothing_keeps_state() {
        let b = breakdown(&[1, 5, 2, 3, 4, 4]);
        match TurnState::new().resolve(&b, &[false, false]).unwrap() {
            Transition::Scored {
                next,
                banked,
                hot_dice,
                ..
            } => {
                assert_eq!(banked, 0);
                assert!(!hot_dice);
                assert_eq!(next.available_dice(), 6);
                assert_eq!(next.rolls(), 1);
            }
            Transition::Bust => panic!("expected a score"),
        }
    }
}
