// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Color, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank().value(), 14);
//! assert_eq!(ah.color(), Color::Red);
//!
//! let ts: Card = "10S".parse().unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards from the front of the deck:
//!
//! ```
//! # use drawpoker_cards::{Deck, Error};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//!
//! // Dealing more cards than left in the deck fails.
//! assert!(matches!(deck.deal(48), Err(Error::Exhausted { .. })));
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use drawpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Color, Deck, Rank, Suit};

mod error;
pub use error::{Error, Result};
