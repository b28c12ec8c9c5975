use serde::{Deserialize, Serialize};

use crate::errors::DiceError;

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;
/// Highest face on a die.
pub const MAX_FACE: u8 = 6;
/// Number of dice a turn starts with (and gets back on hot dice).
pub const FULL_HAND: usize = 6;

/// A validated roll of 1 to 6 dice with faces 1 to 6.
///
/// Order is irrelevant: the dice are kept sorted so equal multisets compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Hand {
    dice: Vec<u8>,
}

impl Hand {
    /// Build a hand of any legal size (1-6).
    pub fn new(values: Vec<u8>) -> Result<Self, DiceError> {
        if values.is_empty() || values.len() > FULL_HAND {
            return Err(DiceError::HandSize {
                expected: values.len().clamp(1, FULL_HAND),
                actual: values.len(),
            });
        }
        Self::checked(values)
    }

    /// Build a hand that must contain exactly `expected` dice.
    ///
    /// Size is checked before range, so a short roll with a bad face reports
    /// the size problem.
    ///
    /// ```
    /// use farkell_engine::dice::Hand;
    /// use farkell_engine::errors::DiceError;
    ///
    /// assert!(Hand::with_size(3, vec![1, 5, 6]).is_ok());
    /// assert_eq!(
    ///     Hand::with_size(3, vec![1, 5]),
    ///     Err(DiceError::HandSize { expected: 3, actual: 2 })
    /// );
    /// assert_eq!(
    ///     Hand::with_size(3, vec![1, 9, 0]),
    ///     Err(DiceError::DiceRange { dice: vec![(1, 9), (2, 0)] })
    /// );
    /// ```
    pub fn with_size(expected: usize, values: Vec<u8>) -> Result<Self, DiceError> {
        if values.len() != expected {
            return Err(DiceError::HandSize {
                expected,
                actual: values.len(),
            });
        }
        Self::new(values)
    }

    fn checked(mut values: Vec<u8>) -> Result<Self, DiceError> {
        let bad: Vec<(usize, u8)> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| !(MIN_FACE..=MAX_FACE).contains(*v))
            .map(|(i, &v)| (i, v))
            .collect();
        if !bad.is_empty() {
            return Err(DiceError::DiceRange { dice: bad });
        }
        values.sort_unstable();
        Ok(Self { dice: values })
    }

    /// Dice in ascending face order.
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Occurrences per face; index 0 is unused so `counts()[face]` reads naturally.
    pub fn counts(&self) -> [u8; 7] {
        face_counts(&self.dice)
    }
}

impl TryFrom<Vec<u8>> for Hand {
    type Error = DiceError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Hand::new(values)
    }
}

impl From<Hand> for Vec<u8> {
    fn from(hand: Hand) -> Self {
        hand.dice
    }
}

pub(crate) fn face_counts(dice: &[u8]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &d in dice {
        counts[d as usize] += 1;
    }
    counts
}

/// Parse typed dice such as `"1 1 1 2 3 4"` or `"1,5,6"`.
///
/// Only checks that every token is a number; face range and hand size are left
/// to [`Hand::with_size`] so the caller gets the positional error report.
pub fn parse_dice(input: &str) -> Result<Vec<u8>, String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<u8>()
                .map_err(|_| format!("'{}' is not a die value", t))
        })
        .collect()
}
