// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and payouts.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Jacks or Better hand category.
///
/// Categories are ordered from [Category::Loss] to [Category::RoyalFlush], a
/// higher category always has a higher payout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No winning hand.
    Loss = 0,
    /// A pair of Jacks, Queens, Kings, or Aces.
    JacksOrBetter,
    /// Two pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// Ten to Ace straight flush.
    RoyalFlush,
}

impl Category {
    /// Returns all categories from lowest to highest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            Loss,
            JacksOrBetter,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The payout multiplier for a one credit bet.
    pub fn payout(&self) -> u32 {
        match self {
            Category::Loss => 0,
            Category::JacksOrBetter => 1,
            Category::TwoPair => 2,
            Category::ThreeOfAKind => 3,
            Category::Straight => 4,
            Category::Flush => 6,
            Category::FullHouse => 9,
            Category::FourOfAKind => 25,
            Category::StraightFlush => 50,
            Category::RoyalFlush => 250,
        }
    }

    /// Checks if this category wins a payout.
    pub fn is_win(&self) -> bool {
        *self != Category::Loss
    }

    /// The category identifier, i.e. `"JacksOrBetter"`.
    pub fn ident(&self) -> &'static str {
        match self {
            Category::Loss => "Loss",
            Category::JacksOrBetter => "JacksOrBetter",
            Category::TwoPair => "TwoPair",
            Category::ThreeOfAKind => "ThreeOfAKind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "FullHouse",
            Category::FourOfAKind => "FourOfAKind",
            Category::StraightFlush => "StraightFlush",
            Category::RoyalFlush => "RoyalFlush",
        }
    }

    /// The display name with words separated by spaces, i.e. `"Jacks Or Better"`.
    pub fn name(&self) -> String {
        split_words(self.ident())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Inserts a space before each capitalized word after the first one.
fn split_words(ident: &str) -> String {
    let mut name = String::with_capacity(ident.len() + 4);

    for (idx, c) in ident.char_indices() {
        if idx > 0 && c.is_uppercase() {
            name.push(' ');
        }

        name.push(c);
    }

    name
}

/// The structural pattern a rule matched in a hand.
///
/// Each pattern maps to a single category, a pair below Jacks is a pattern that
/// still loses but it reports the cards that are not part of the pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// A pair of Tens or lower.
    LowPair,
    /// A pair of Jacks or better.
    HighPair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// A straight.
    Straight,
    /// A flush.
    Flush,
    /// A full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight flush.
    StraightFlush,
    /// A royal flush.
    RoyalFlush,
}

impl Pattern {
    /// The category for this pattern.
    pub fn category(&self) -> Category {
        match self {
            Pattern::LowPair => Category::Loss,
            Pattern::HighPair => Category::JacksOrBetter,
            Pattern::TwoPair => Category::TwoPair,
            Pattern::ThreeOfAKind => Category::ThreeOfAKind,
            Pattern::Straight => Category::Straight,
            Pattern::Flush => Category::Flush,
            Pattern::FullHouse => Category::FullHouse,
            Pattern::FourOfAKind => Category::FourOfAKind,
            Pattern::StraightFlush => Category::StraightFlush,
            Pattern::RoyalFlush => Category::RoyalFlush,
        }
    }
}
