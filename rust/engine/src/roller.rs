use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::dice::{MAX_FACE, MIN_FACE};
use crate::errors::{DiceError, GameError};

/// Where the dice for each roll come from.
///
/// A source only hands back raw values; the turn loop validates them and
/// calls [`DiceSource::reject`] before asking again.
pub trait DiceSource {
    /// Supply `count` face values. An `Err` ends the game.
    fn supply(&mut self, count: usize) -> Result<Vec<u8>, GameError>;

    /// Told that the last supplied values were not a valid roll.
    fn reject(&mut self, _error: &DiceError) {}
}

/// Simulated dice, reproducible for a given seed.
#[derive(Debug)]
pub struct RandomDice {
    rng: ChaCha20Rng,
}

impl RandomDice {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn roll(&mut self, count: usize) -> Vec<u8> {
        (0..count)
            .map(|_| self.rng.random_range(MIN_FACE..=MAX_FACE))
            .collect()
    }
}

impl DiceSource for RandomDice {
    fn supply(&mut self, count: usize) -> Result<Vec<u8>, GameError> {
        Ok(self.roll(count))
    }
}

/// Pre-set rolls handed out in order, regardless of the count asked for.
/// Used by tests and by replaying recorded games.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<Vec<u8>>,
    rejected: Vec<DiceError>,
}

impl ScriptedDice {
    pub fn new<I>(rolls: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            rolls: rolls.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    pub fn push(&mut self, roll: Vec<u8>) {
        self.rolls.push_back(roll);
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }

    /// Every rejection reported so far, oldest first.
    pub fn rejected(&self) -> &[DiceError] {
        &self.rejected
    }
}

impl DiceSource for ScriptedDice {
    fn supply(&mut self, _count: usize) -> Result<Vec<u8>, GameError> {
        self.rolls.pop_front().ok_or(GameError::DiceExhausted)
    }

    fn reject(&mut self, error: &DiceError) {
        self.rejected.push(error.clone());
    }
}
