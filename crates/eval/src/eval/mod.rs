// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluator.
//!
//! The evaluator groups the hand cards by rank and suit in a single pass and then
//! runs a fixed sequence of rules, from a pair up to a royal flush. Rules run
//! unconditionally and the last rule that matches decides the [Category] and
//! the irrelevant cards, so that for example a full house wins over the pair and
//! three of a kind that are also found in the same hand.
//!
//! The ace is read as a low card only on a local copy of the ranks when looking
//! for a five high straight, the caller cards are never changed.
use serde::{Deserialize, Serialize};

use drawpoker_cards::{Card, Error, Result};

mod category;
pub use category::{Category, Pattern};

mod rules;
use rules::{HandShape, RULES};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The result of a hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    category: Category,
    pattern: Option<Pattern>,
    irrelevant: Vec<Card>,
}

impl Evaluation {
    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The pattern that decided the category.
    ///
    /// This is `None` when no rule matched, in this case the category is a
    /// [Category::Loss] and there are no irrelevant cards to report.
    pub fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }

    /// The cards that don't contribute to the pattern, in hand order.
    pub fn irrelevant(&self) -> &[Card] {
        &self.irrelevant
    }

    /// Checks if a card doesn't contribute to the pattern.
    pub fn is_irrelevant(&self, card: Card) -> bool {
        self.irrelevant.contains(&card)
    }

    /// The cards to keep for this pattern, in hand order.
    ///
    /// Returns no cards if no rule matched.
    pub fn relevant(&self, hand: &[Card]) -> Vec<Card> {
        if self.pattern.is_none() {
            return Vec::new();
        }

        hand.iter()
            .copied()
            .filter(|c| !self.is_irrelevant(*c))
            .collect()
    }

    /// The points won for a bet multiplier, saturating at `u32::MAX`.
    pub fn points(&self, multiplier: u32) -> u32 {
        self.category.payout().saturating_mul(multiplier)
    }
}

/// Evaluates a five cards hand.
///
/// Returns [Error::InvalidInput] if the hand doesn't have exactly five cards.
pub fn evaluate(hand: &[Card]) -> Result<Evaluation> {
    if hand.len() != HAND_SIZE {
        return Err(Error::invalid_input(format!(
            "a hand must have {HAND_SIZE} cards, got {}",
            hand.len()
        )));
    }

    let shape = HandShape::new(hand);
    let eval = match RULES.iter().filter_map(|rule| rule(&shape)).last() {
        Some(m) => Evaluation {
            category: m.pattern.category(),
            pattern: Some(m.pattern),
            irrelevant: m.irrelevant,
        },
        None => Evaluation {
            category: Category::Loss,
            pattern: None,
            irrelevant: Vec::new(),
        },
    };

    Ok(eval)
}
