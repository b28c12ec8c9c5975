//! # farkell-engine: Dice Game Rules Engine
//!
//! Rules core for a Farkle-style push-your-luck dice game. Scores rolls,
//! runs each turn as a small state machine and moves the table through
//! entry thresholds, the last round and the final result.
//!
//! ## Core Modules
//!
//! - [`dice`] - Validated dice hands and dice text parsing
//! - [`scoring`] - Roll decomposition into scoring entries, roll names
//! - [`roller`] - Dice sources (seeded RNG, scripted rolls)
//! - [`turn`] - Turn state machine and the decision provider seam
//! - [`game`] - Table progression, last round and winners
//! - [`player`] - Seats, strategies and who controls them
//! - [`config`] - Versioned game configuration record
//! - [`logger`] - Turn records and JSONL history
//! - [`errors`] - Error types for dice, configuration and play
//!
//! ## Quick Start
//!
//! ```rust
//! use farkell_engine::dice::Hand;
//! use farkell_engine::scoring::{name_hand, score};
//!
//! let hand = Hand::new(vec![1, 1, 1, 5, 2, 3]).unwrap();
//! let breakdown = score(&hand);
//! assert_eq!(breakdown.total(), 350);
//! assert_eq!(name_hand(&hand), "THREE OF A KIND AND A FIVE");
//! ```
//!
//! ## Deterministic Play
//!
//! Simulated dice are reproducible for a given seed:
//!
//! ```rust
//! use farkell_engine::roller::RandomDice;
//!
//! let mut a = RandomDice::new_with_seed(42);
//! let mut b = RandomDice::new_with_seed(42);
//! assert_eq!(a.roll(6), b.roll(6));
//! ```

pub mod config;
pub mod dice;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod roller;
pub mod scoring;
pub mod turn;
