use std::collections::VecDeque;

use farkell_engine::errors::{DiceError, GameError};
use farkell_engine::roller::ScriptedDice;
use farkell_engine::scoring::ScoringBreakdown;
use farkell_engine::turn::{play_turn, DecisionProvider, Seat, TurnContext};

/// Replays fixed answers and remembers how often it was asked.
#[derive(Default)]
struct Scripted {
    banks: VecDeque<Vec<bool>>,
    again: VecDeque<bool>,
    bank_calls: usize,
    seen_banks: Vec<u32>,
}

impl Scripted {
    fn new(banks: Vec<Vec<bool>>, again: Vec<bool>) -> Self {
        Self {
            banks: banks.into(),
            again: again.into(),
            ..Default::default()
        }
    }
}

impl DecisionProvider for Scripted {
    fn choose_banks(
        &mut self,
        _ctx: &TurnContext<'_>,
        _breakdown: &ScoringBreakdown,
    ) -> Result<Vec<bool>, GameError> {
        self.bank_calls += 1;
        self.banks
            .pop_front()
            .ok_or_else(|| GameError::Aborted("no bank answer".into()))
    }

    fn keep_rolling(&mut self, ctx: &TurnContext<'_>) -> Result<bool, GameError> {
        self.seen_banks.push(ctx.state.bank());
        Ok(self.again.pop_front().unwrap_or(false))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn seat() -> Seat<'static> {
    Seat {
        player: "Harry",
        score: 0,
        entered: false,
        entry_score: 500,
        max_score: 10_000,
    }
}

#[test]
fn single_entry_is_banked_without_asking() {
    let mut dice = ScriptedDice::new(vec![vec![1, 1, 1, 2, 3, 4]]);
    let mut bot = Scripted::new(vec![], vec![false]);
    let rec = play_turn(&mut dice, &mut bot, seat()).expect("turn");

    assert_eq!(rec.score, 300);
    assert!(!rec.busted);
    assert_eq!(bot.bank_calls, 0);
    let roll = rec.last_roll().expect("one roll");
    assert!(roll.auto_banked);
    assert_eq!(roll.name, "THREE OF A KIND");
    assert_eq!(roll.points, 300);
}

#[test]
fn hot_dice_grants_six_new_dice_and_keeps_the_bank() {
    let mut dice = ScriptedDice::new(vec![vec![2, 2, 2, 3, 3, 3], vec![1, 2, 3, 4, 6, 6]]);
    let mut bot = Scripted::new(vec![], vec![true, false]);
    let rec = play_turn(&mut dice, &mut bot, seat()).expect("turn");

    assert!(rec.rolls[0].hot_dice);
    assert_eq!(rec.rolls[1].dice.len(), 6);
    assert_eq!(rec.score, 2600);
    assert_eq!(bot.seen_banks, vec![2500, 2600]);
    assert!(dice.rejected().is_empty());
}

#[test]
fn bust_forfeits_the_whole_turn() {
    let mut dice = ScriptedDice::new(vec![vec![1, 1, 1, 2, 3, 4], vec![2, 3, 4]]);
    let mut bot = Scripted::new(vec![], vec![true]);
    let rec = play_turn(&mut dice, &mut bot, seat()).expect("turn");

    assert!(rec.busted);
    assert_eq!(rec.score, 0);
    assert_eq!(rec.rolls.len(), 2);
    assert!(rec.last_roll().unwrap().is_bust());
    assert_eq!(rec.last_roll().unwrap().name, "NO SCORE");
}

#[test]
fn unbanked_dice_are_rerolled() {
    let mut dice = ScriptedDice::new(vec![vec![1, 5, 2, 3, 4, 4], vec![5, 2, 3, 4, 6]]);
    let mut bot = Scripted::new(vec![vec![false, true]], vec![true, false]);
    let rec = play_turn(&mut dice, &mut bot, seat()).expect("turn");

    assert_eq!(bot.bank_calls, 1);
    assert_eq!(rec.rolls[0].banked, vec![false, true]);
    assert_eq!(rec.rolls[0].points, 100);
    assert_eq!(rec.score, 150);
}

#[test]
fn invalid_dice_are_asked_for_again() {
    let mut dice = ScriptedDice::new(vec![
        vec![1, 2],
        vec![9, 1, 1, 1, 2, 3],
        vec![1, 1, 1, 2, 3, 4],
    ]);
    let mut bot = Scripted::new(vec![], vec![false]);
    let rec = play_turn(&mut dice, &mut bot, seat()).expect("turn");

    assert_eq!(rec.score, 300);
    assert_eq!(rec.rolls.len(), 1);
    assert_eq!(
        dice.rejected(),
        &[
            DiceError::HandSize {
                expected: 6,
                actual: 2
            },
            DiceError::DiceRange { dice: vec![(0, 9)] },
        ]
    );
}

#[test]
fn wrong_number_of_choices_stops_the_turn() {
    let mut dice = ScriptedDice::new(vec![vec![1, 5, 2, 3, 4, 4]]);
    let mut bot = Scripted::new(vec![vec![true, true, true]], vec![]);
    let err = play_turn(&mut dice, &mut bot, seat()).unwrap_err();
    assert_eq!(
        err,
        GameError::DecisionShape {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn running_out_of_dice_is_reported() {
    let mut dice = ScriptedDice::new(vec![vec![1, 1, 1, 2, 3, 4]]);
    let mut bot = Scripted::new(vec![], vec![true]);
    assert_eq!(
        play_turn(&mut dice, &mut bot, seat()).unwrap_err(),
        GameError::DiceExhausted
    );
}
