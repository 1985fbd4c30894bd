// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw Poker hand evaluator.
//!
//! Classifies a five cards hand into a Jacks or Better [Category], computes the
//! cards that don't contribute to the category, useful for UIs to dim cards or
//! to suggest which cards to hold, and maps the category to its payout.
//!
//! ```
//! # use drawpoker_eval::*;
//! let hand = ["JS", "JD", "3C", "7H", "9S"]
//!     .into_iter()
//!     .map(|c| c.parse::<Card>())
//!     .collect::<Result<Vec<_>>>()
//!     .unwrap();
//!
//! let eval = evaluate(&hand).unwrap();
//! assert_eq!(eval.category(), Category::JacksOrBetter);
//! assert_eq!(eval.irrelevant(), &hand[2..]);
//! assert_eq!(eval.points(5), 5);
//!
//! // A hand must have exactly five cards.
//! assert!(matches!(evaluate(&hand[..4]), Err(Error::InvalidInput(_))));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, Evaluation, Pattern, evaluate};

// Reexport cards types.
pub use drawpoker_cards::{Card, Color, Deck, Error, Rank, Result, Suit};
