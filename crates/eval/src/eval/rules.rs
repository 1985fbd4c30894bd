// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rules in evaluation order.
use drawpoker_cards::{Card, Rank};

use super::Pattern;

/// Value of an ace read as the lowest card of a straight.
const LOW_ACE: u8 = 1;

/// A rule result.
#[derive(Debug)]
pub(crate) struct Match {
    pub pattern: Pattern,
    pub irrelevant: Vec<Card>,
}

impl Match {
    /// A match where every card contributes to the pattern.
    fn whole_hand(pattern: Pattern) -> Self {
        Match {
            pattern,
            irrelevant: Vec::new(),
        }
    }
}

/// A hand rule.
pub(crate) type Rule = fn(&HandShape<'_>) -> Option<Match>;

/// The rules in evaluation order, when more than one rule matches the last one
/// wins.
pub(crate) const RULES: [Rule; 9] = [
    one_pair,
    two_pair,
    three_of_a_kind,
    straight,
    flush,
    full_house,
    four_of_a_kind,
    straight_flush,
    royal_flush,
];

/// The rank and suit groups of a hand.
#[derive(Debug)]
pub(crate) struct HandShape<'a> {
    cards: &'a [Card],
    /// Cards count by rank value.
    ranks: [u8; 15],
    /// Cards count by suit.
    suits: [u8; 4],
    straight: bool,
}

impl<'a> HandShape<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        let mut ranks = [0; 15];
        let mut suits = [0; 4];

        for card in cards {
            ranks[card.rank().value() as usize] += 1;
            suits[card.suit() as usize] += 1;
        }

        Self {
            cards,
            ranks,
            suits,
            straight: is_straight(cards),
        }
    }

    /// Number of cards with the given rank.
    fn count(&self, rank: Rank) -> u8 {
        self.ranks[rank.value() as usize]
    }

    /// The ranks of groups with `size` cards.
    fn groups(&self, size: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().filter(move |r| self.count(*r) == size)
    }

    /// Cards that belong to a group for which `f` returns false, in hand order.
    fn cards_outside<F>(&self, f: F) -> Vec<Card>
    where
        F: Fn(u8) -> bool,
    {
        self.cards
            .iter()
            .copied()
            .filter(|c| !f(self.count(c.rank())))
            .collect()
    }

    fn single_pair(&self) -> Option<Rank> {
        let mut pairs = self.groups(2);
        match (pairs.next(), pairs.next()) {
            (Some(rank), None) => Some(rank),
            _ => None,
        }
    }

    fn has_three(&self) -> bool {
        self.groups(3).next().is_some()
    }

    fn is_flush(&self) -> bool {
        self.suits.iter().any(|&n| n as usize == self.cards.len())
    }

    fn is_straight_flush(&self) -> bool {
        self.straight && self.is_flush()
    }
}

/// Checks for five consecutive ranks reading an ace as the lowest card unless
/// the hand lowest card is a ten.
fn is_straight(cards: &[Card]) -> bool {
    let mut values = cards.iter().map(|c| c.rank().value()).collect::<Vec<_>>();

    let ace = Rank::Ace.value();
    let max = values.iter().copied().max();
    let min = values.iter().copied().min();

    if max == Some(ace) && min != Some(Rank::Ten.value()) {
        if let Some(v) = values.iter_mut().find(|v| **v == ace) {
            *v = LOW_ACE;
        }
    }

    values.sort_unstable();
    values.dedup();

    values.len() == 5 && values.windows(2).all(|w| w[1] == w[0] + 1)
}

fn one_pair(shape: &HandShape<'_>) -> Option<Match> {
    let rank = shape.single_pair()?;

    if rank.is_face_or_ace() {
        Some(Match {
            pattern: Pattern::HighPair,
            irrelevant: shape.cards_outside(|n| n == 2),
        })
    } else {
        // Only the singletons are irrelevant here.
        Some(Match {
            pattern: Pattern::LowPair,
            irrelevant: shape.cards_outside(|n| n != 1),
        })
    }
}

fn two_pair(shape: &HandShape<'_>) -> Option<Match> {
    let groups = shape.ranks.iter().filter(|&&n| n >= 2).count();
    (groups == 2).then(|| Match {
        pattern: Pattern::TwoPair,
        irrelevant: shape.cards_outside(|n| n >= 2),
    })
}

fn three_of_a_kind(shape: &HandShape<'_>) -> Option<Match> {
    shape.has_three().then(|| Match {
        pattern: Pattern::ThreeOfAKind,
        irrelevant: shape.cards_outside(|n| n == 3),
    })
}

fn straight(shape: &HandShape<'_>) -> Option<Match> {
    shape.straight.then(|| Match::whole_hand(Pattern::Straight))
}

fn flush(shape: &HandShape<'_>) -> Option<Match> {
    shape.is_flush().then(|| Match::whole_hand(Pattern::Flush))
}

fn full_house(shape: &HandShape<'_>) -> Option<Match> {
    let full_house = shape.single_pair().is_some() && shape.has_three();
    full_house.then(|| Match::whole_hand(Pattern::FullHouse))
}

fn four_of_a_kind(shape: &HandShape<'_>) -> Option<Match> {
    shape.groups(4).next().map(|_| Match {
        pattern: Pattern::FourOfAKind,
        irrelevant: shape.cards_outside(|n| n == 4),
    })
}

fn straight_flush(shape: &HandShape<'_>) -> Option<Match> {
    shape
        .is_straight_flush()
        .then(|| Match::whole_hand(Pattern::StraightFlush))
}

fn royal_flush(shape: &HandShape<'_>) -> Option<Match> {
    let ten_to_ace = shape.cards.iter().map(|c| c.rank()).min() == Some(Rank::Ten);
    (shape.is_straight_flush() && ten_to_ace).then(|| Match::whole_hand(Pattern::RoyalFlush))
}
