//! Strategy that never pushes its luck.

use farkell_engine::errors::GameError;
use farkell_engine::scoring::ScoringBreakdown;
use farkell_engine::turn::{DecisionProvider, TurnContext};

/// Banks every scoring entry and stops after the first roll.
///
/// Deterministic, so it doubles as the reference opponent for simulations.
///
/// ```rust
/// use farkell_ai::lazy_bank::LazyBankAI;
/// use farkell_engine::turn::DecisionProvider;
///
/// let ai = LazyBankAI::new();
/// assert_eq!(ai.name(), "LAZY-BANK");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LazyBankAI;

impl LazyBankAI {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionProvider for LazyBankAI {
    fn choose_banks(
        &mut self,
        _ctx: &TurnContext<'_>,
        breakdown: &ScoringBreakdown,
    ) -> Result<Vec<bool>, GameError> {
        Ok(vec![true; breakdown.len()])
    }

    fn keep_rolling(&mut self, _ctx: &TurnContext<'_>) -> Result<bool, GameError> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "LAZY-BANK"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farkell_engine::roller::ScriptedDice;
    use farkell_engine::turn::{play_turn, Seat};

    fn seat() -> Seat<'static> {
        Seat {
            player: "Bot",
            score: 0,
            entered: false,
            entry_score: 500,
            max_score: 10_000,
        }
    }

    #[test]
    fn test_lazy_bank_single_roll_turn() {
        let mut dice = ScriptedDice::new(vec![vec![1, 1, 1, 2, 3, 4]]);
        let mut ai = LazyBankAI::new();
        let rec = play_turn(&mut dice, &mut ai, seat()).expect("turn");
        assert_eq!(rec.score, 300);
        assert_eq!(rec.rolls.len(), 1);
        assert_eq!(rec.rolls[0].name, "THREE OF A KIND");
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_lazy_bank_takes_every_entry() {
        let mut dice = ScriptedDice::new(vec![vec![1, 5, 5, 2, 3, 4]]);
        let mut ai = LazyBankAI::new();
        let rec = play_turn(&mut dice, &mut ai, seat()).expect("turn");
        assert_eq!(rec.rolls[0].banked, vec![true, true, true]);
        assert_eq!(rec.score, 200);
    }
}
