// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw Poker game loop.
//!
//! A [Machine] holds the player credits and bet and plays one [Round] at a time:
//! the player is dealt five cards, chooses the cards to hold, and draws new
//! cards for the other slots, the final hand is then paid using the bet as a
//! multiplier:
//!
//! ```
//! # use drawpoker_game::{Config, Machine, Phase};
//! let config = Config {
//!     credits: 100,
//!     bet: 5,
//!     seed: Some(42),
//!     auto_hold: true,
//! };
//!
//! let mut machine = Machine::new(config).unwrap();
//! machine.deal().unwrap();
//! assert_eq!(machine.credits().amount(), 95);
//!
//! // Hold the first card and draw.
//! machine.set_hold(0, true).unwrap();
//! let points = machine.draw().unwrap();
//!
//! let round = machine.round().unwrap();
//! assert_eq!(round.phase(), Phase::Drawn);
//! assert_eq!(machine.credits().amount(), 95 + points);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod credits;
pub use credits::{Bet, Credits};

mod holds;
pub use holds::HoldMask;

pub mod machine;
pub use machine::{Config, Machine};

pub mod round;
pub use round::{Phase, Round};

// Reexport evaluator types.
pub use drawpoker_eval::{Card, Category, Error, Evaluation, Result};
