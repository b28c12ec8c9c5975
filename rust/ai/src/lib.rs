//! # farkell-ai: Computer Players
//!
//! Automated decision providers for the dice game engine. Each named
//! [`Strategy`] maps to one implementation of
//! [`DecisionProvider`].
//!
//! ## Core Components
//!
//! - [`lazy_bank`] - Bank everything, never roll again
//! - [`random`] - Seeded coin flips for every decision
//! - [`create_ai`] - Factory from a strategy to a boxed provider
//!
//! ## Quick Start
//!
//! ```rust
//! use farkell_ai::create_ai;
//! use farkell_engine::player::Strategy;
//! use farkell_engine::roller::ScriptedDice;
//! use farkell_engine::turn::{play_turn, Seat};
//!
//! let mut ai = create_ai(Strategy::LazyBank, 42);
//! let mut dice = ScriptedDice::new(vec![vec![1, 1, 1, 2, 3, 4]]);
//! let seat = Seat {
//!     player: "Bot",
//!     score: 0,
//!     entered: false,
//!     entry_score: 500,
//!     max_score: 10_000,
//! };
//! let record = play_turn(&mut dice, ai.as_mut(), seat).expect("turn");
//! assert_eq!(record.score, 300);
//! ```

use farkell_engine::errors::ConfigError;
use farkell_engine::player::Strategy;
use farkell_engine::turn::DecisionProvider;

pub mod lazy_bank;
pub mod random;

/// Build the provider for a strategy.
///
/// `seed` only matters for strategies that draw random numbers.
///
/// # Example
///
/// ```rust
/// use farkell_ai::create_ai;
/// use farkell_engine::player::Strategy;
///
/// let ai = create_ai(Strategy::Random, 7);
/// assert_eq!(ai.name(), "RANDOM");
/// ```
pub fn create_ai(strategy: Strategy, seed: u64) -> Box<dyn DecisionProvider + Send> {
    match strategy {
        Strategy::LazyBank => Box::new(lazy_bank::LazyBankAI::new()),
        Strategy::Random => Box::new(random::RandomAI::new_with_seed(seed)),
    }
}

/// Like [`create_ai`], from a strategy tag such as `"LAZY-BANK"`.
///
/// # Errors
///
/// [`ConfigError::UnknownStrategy`] for tags that name no strategy.
pub fn create_ai_by_name(tag: &str, seed: u64) -> Result<Box<dyn DecisionProvider + Send>, ConfigError> {
    Ok(create_ai(tag.parse()?, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_strategy_has_a_provider() {
        for s in Strategy::ALL {
            assert_eq!(create_ai(s, 0).name(), s.as_str());
        }
    }

    #[test]
    fn test_unknown_tag_is_a_config_error() {
        assert_eq!(
            create_ai_by_name("GREEDY", 0).err(),
            Some(ConfigError::UnknownStrategy("GREEDY".into()))
        );
        assert!(create_ai_by_name("random", 0).is_ok());
    }
}
