//! Hand scoring: decomposes a roll into disjoint scoring entries.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::dice::{face_counts, Hand, FULL_HAND};

/// One scoring part of a roll: its points and the dice it consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub value: u32,
    /// Contributing dice, ascending.
    pub dice: Vec<u8>,
}

impl Score {
    pub fn new(value: u32, mut dice: Vec<u8>) -> Self {
        dice.sort_unstable();
        Self { value, dice }
    }
}

/// Patterns that only exist with all six dice. Each consumes the whole roll.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SixDiceCombo {
    Straight,
    TwoTriples,
    ThreePairs,
    SixOfAKind,
}

impl SixDiceCombo {
    pub fn points(self) -> u32 {
        match self {
            SixDiceCombo::Straight => 1500,
            SixDiceCombo::TwoTriples => 2500,
            SixDiceCombo::ThreePairs => 1500,
            SixDiceCombo::SixOfAKind => 3000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SixDiceCombo::Straight => "ONE-TO-SIX STRAIGHT",
            SixDiceCombo::TwoTriples => "TWO TRIPLES",
            SixDiceCombo::ThreePairs => "THREE PAIRS",
            SixDiceCombo::SixOfAKind => "SIX OF A KIND",
        }
    }

    /// Match a six-dice hand against the special patterns, in precedence order.
    pub fn detect(hand: &Hand) -> Option<Self> {
        if hand.len() != FULL_HAND {
            return None;
        }
        let counts = hand.counts();
        let with = |n: u8| counts[1..].iter().filter(|&&c| c == n).count();
        if with(1) == 6 {
            Some(SixDiceCombo::Straight)
        } else if with(3) == 2 {
            Some(SixDiceCombo::TwoTriples)
        } else if with(2) == 3 || (with(4) == 1 && with(2) == 1) {
            // four of a kind plus a pair is paid as three pairs
            Some(SixDiceCombo::ThreePairs)
        } else if with(6) == 1 {
            Some(SixDiceCombo::SixOfAKind)
        } else {
            None
        }
    }
}

/// Ordered, disjoint decomposition of a roll. Empty means bust.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    entries: Vec<Score>,
}

impl ScoringBreakdown {
    pub fn entries(&self) -> &[Score] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_bust(&self) -> bool {
        self.entries.is_empty()
    }

    /// Points if every entry were banked.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|s| s.value).sum()
    }

    /// Dice consumed if every entry were banked.
    pub fn dice_used(&self) -> usize {
        self.entries.iter().map(|s| s.dice.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Score> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ScoringBreakdown {
    type Item = &'a Score;
    type IntoIter = std::slice::Iter<'a, Score>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Score a roll.
///
/// Six-dice specials take the whole roll. Otherwise at most one of-a-kind
/// combo is taken (lowest face first) and every remaining 1 and 5 scores on
/// its own. Entries come back ascending by points.
///
/// ```
/// use farkell_engine::dice::Hand;
/// use farkell_engine::scoring::{score, Score};
///
/// let b = score(&Hand::new(vec![1, 1, 1, 2, 3, 4]).unwrap());
/// assert_eq!(b.entries(), &[Score::new(300, vec![1, 1, 1])]);
///
/// let bust = score(&Hand::new(vec![2, 3, 4, 6]).unwrap());
/// assert!(bust.is_bust());
/// ```
pub fn score(hand: &Hand) -> ScoringBreakdown {
    if let Some(combo) = SixDiceCombo::detect(hand) {
        return ScoringBreakdown {
            entries: vec![Score::new(combo.points(), hand.dice().to_vec())],
        };
    }

    let mut entries = Vec::new();
    let mut counts = hand.counts();
    if let Some(combo) = score_combo(&counts) {
        counts[combo.dice[0] as usize] -= combo.dice.len() as u8;
        entries.push(combo);
    }
    entries.extend(score_misc(&counts));
    entries.sort_by(breakdown_order);
    ScoringBreakdown { entries }
}

fn breakdown_order(a: &Score, b: &Score) -> Ordering {
    a.value
        .cmp(&b.value)
        .then_with(|| a.dice.first().cmp(&b.dice.first()))
}

/// First face (ascending) holding three, four or five of a kind.
fn score_combo(counts: &[u8; 7]) -> Option<Score> {
    (1..=6u8).find_map(|face| {
        let n = counts[face as usize];
        let value = match n {
            3 if face == 1 => 300,
            3 => face as u32 * 100,
            4 => 1000,
            5 => 2000,
            _ => return None,
        };
        Some(Score::new(value, vec![face; n as usize]))
    })
}

fn score_misc(counts: &[u8; 7]) -> Vec<Score> {
    let ones = (0..counts[1]).map(|_| Score::new(100, vec![1]));
    let fives = (0..counts[5]).map(|_| Score::new(50, vec![5]));
    ones.chain(fives).collect()
}

/// Human-readable name of a roll, e.g. `"THREE OF A KIND AND A MOOSE"`.
///
/// Walks the same precedence as [`score`]: six-dice special, then the
/// of-a-kind combo, then the leftover 1s ("moose") and 5s.
pub fn name_hand(hand: &Hand) -> String {
    if let Some(combo) = SixDiceCombo::detect(hand) {
        return combo.name().to_string();
    }

    let mut counts = hand.counts();
    let combo = score_combo(&counts).map(|c| {
        counts[c.dice[0] as usize] -= c.dice.len() as u8;
        match c.dice.len() {
            3 => "THREE OF A KIND",
            4 => "FOUR OF A KIND",
            _ => "FIVE OF A KIND",
        }
    });
    let misc = name_misc(counts[1], counts[5]);

    match (combo, misc) {
        (Some(c), Some(m)) => format!("{} AND {}", c, m),
        (Some(c), None) => c.to_string(),
        (None, Some(m)) => m,
        (None, None) => "NO SCORE".to_string(),
    }
}

/// Name the dice of a single [`Score`] entry.
pub fn name_score(entry: &Score) -> String {
    let counts = face_counts(&entry.dice);
    if entry.dice.len() == FULL_HAND {
        if let Ok(hand) = Hand::new(entry.dice.clone()) {
            return name_hand(&hand);
        }
    }
    match entry.dice.len() {
        3 => "THREE OF A KIND".to_string(),
        4 => "FOUR OF A KIND".to_string(),
        5 => "FIVE OF A KIND".to_string(),
        _ => name_misc(counts[1], counts[5]).unwrap_or_else(|| "NO SCORE".to_string()),
    }
}

fn name_misc(ones: u8, fives: u8) -> Option<String> {
    let ones = match ones {
        0 => None,
        1 => Some("A MOOSE".to_string()),
        2 => Some("TWO MOOSE".to_string()),
        n => Some(format!("{} MOOSE", n)),
    };
    let fives = match fives {
        0 => None,
        1 => Some("A FIVE".to_string()),
        2 => Some("TWO FIVES".to_string()),
        n => Some(format!("{} FIVES", n)),
    };
    match (ones, fives) {
        (Some(o), Some(f)) => Some(format!("{} AND {}", o, f)),
        (o, f) => o.or(f),
    }
}
