//! Coin-flip strategy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use farkell_engine::errors::GameError;
use farkell_engine::scoring::ScoringBreakdown;
use farkell_engine::turn::{DecisionProvider, TurnContext};

/// Decides every bank choice and every continue/stop uniformly at random.
///
/// Seeded, so a simulation replays the same decisions for the same seed.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl DecisionProvider for RandomAI {
    fn choose_banks(
        &mut self,
        _ctx: &TurnContext<'_>,
        breakdown: &ScoringBreakdown,
    ) -> Result<Vec<bool>, GameError> {
        Ok((0..breakdown.len())
            .map(|_| self.rng.random_bool(0.5))
            .collect())
    }

    fn keep_rolling(&mut self, _ctx: &TurnContext<'_>) -> Result<bool, GameError> {
        Ok(self.rng.random_bool(0.5))
    }

    fn name(&self) -> &str {
        "RANDOM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farkell_engine::dice::Hand;
    use farkell_engine::scoring::score;
    use farkell_engine::turn::TurnState;

    fn ctx() -> TurnContext<'static> {
        TurnContext {
            player: "Bot",
            score: 0,
            entered: false,
            entry_score: 500,
            max_score: 10_000,
            state: TurnState::new(),
            roll: None,
        }
    }

    #[test]
    fn test_random_choices_match_breakdown() {
        let b = score(&Hand::new(vec![1, 1, 5, 5, 3, 4]).unwrap());
        let mut ai = RandomAI::new_with_seed(3);
        for _ in 0..50 {
            let choices = ai.choose_banks(&ctx(), &b).unwrap();
            assert_eq!(choices.len(), b.len());
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let mut a = RandomAI::new_with_seed(11);
        let mut b = RandomAI::new_with_seed(11);
        let ra: Vec<bool> = (0..32).map(|_| a.keep_rolling(&ctx()).unwrap()).collect();
        let rb: Vec<bool> = (0..32).map(|_| b.keep_rolling(&ctx()).unwrap()).collect();
        assert_eq!(ra, rb);
        // both answers show up
        assert!(ra.contains(&true) && ra.contains(&false));
    }
}
