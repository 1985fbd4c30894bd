// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// A Poker card.
///
/// A card is an immutable rank and suit pair, its color is always derived from
/// the suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card color.
    pub fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parses a card from a rank followed by a suit, i.e. `"AS"`, `"10h"`,
    /// `"Td"` or `"Q♣"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (suit_pos, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| Error::invalid_input("empty card"))?;

        if suit_pos == 0 {
            return Err(Error::invalid_input(format!("invalid card {s:?}")));
        }

        let (rank, suit) = s.split_at(suit_pos);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

/// Card rank.
///
/// The discriminant is the rank value, from 2 for a deuce to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, an ace is always 14.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    /// Checks if this is a Jack, Queen, King, or Ace.
    pub fn is_face_or_ace(&self) -> bool {
        *self > Rank::Ten
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            r => write!(f, "{}", r.value()),
        }
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            n => n
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .and_then(Rank::from_value)
                .ok_or_else(|| Error::invalid_input(format!("invalid rank {s:?}")))?,
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit color.
    pub fn color(&self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "S" | "s" | "♠" => Ok(Suit::Spades),
            "H" | "h" | "♥" => Ok(Suit::Hearts),
            "D" | "d" | "♦" => Ok(Suit::Diamonds),
            "C" | "c" | "♣" => Ok(Suit::Clubs),
            _ => Err(Error::invalid_input(format!("invalid suit {s:?}"))),
        }
    }
}

/// Card color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

/// A cards Deck
///
/// Cards are dealt from the front of the deck, a dealt card doesn't come back
/// until a new deck is created.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that deals the given cards in order.
    ///
    /// Fails with [Error::InvalidInput] if a card is repeated.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(Error::invalid_input(format!("duplicate card {card}")));
            }
        }

        Ok(Self { cards })
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the front of the deck.
    ///
    /// Fails with [Error::InvalidInput] if `n` is zero and with
    /// [Error::Exhausted] if there are less than `n` cards, the deck is left
    /// untouched on error.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        if n == 0 {
            return Err(Error::invalid_input("cannot deal zero cards"));
        }

        if n > self.cards.len() {
            return Err(Error::Exhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Deals a card from the front of the deck.
    pub fn deal_card(&mut self) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(Error::Exhausted {
                requested: 1,
                remaining: 0,
            });
        }

        Ok(self.cards.remove(0))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand of the cards in the deck.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        visit_ksubsets(&self.cards, k, &mut hand, &mut f);
    }
}

/// Extends `hand` with each combination of the remaining cards.
fn visit_ksubsets<F>(cards: &[Card], k: usize, hand: &mut Vec<Card>, f: &mut F)
where
    F: FnMut(&[Card]),
{
    if hand.len() == k {
        f(hand.as_slice());
        return;
    }

    let needed = k - hand.len();
    for (idx, card) in cards.iter().enumerate().take(cards.len() + 1 - needed) {
        hand.push(*card);
        visit_ksubsets(&cards[idx + 1..], k, hand, f);
        hand.pop();
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_unique_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while !deck.is_empty() {
            let card = deck.deal_card().unwrap();
            assert!(cards.insert(card), "{card} dealt twice");
        }

        assert_eq!(cards.len(), Deck::SIZE);
        assert!(matches!(
            deck.deal_card(),
            Err(Error::Exhausted {
                requested: 1,
                remaining: 0
            })
        ));
    }

    #[test]
    fn deal_from_front() {
        let mut deck = Deck::default();
        let hand = deck.deal(5).unwrap();
        assert_eq!(
            hand,
            vec![
                Card::new(Rank::Deuce, Suit::Spades),
                Card::new(Rank::Trey, Suit::Spades),
                Card::new(Rank::Four, Suit::Spades),
                Card::new(Rank::Five, Suit::Spades),
                Card::new(Rank::Six, Suit::Spades),
            ]
        );

        assert_eq!(deck.deal_card().unwrap(), Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(deck.count(), Deck::SIZE - 6);
    }

    #[test]
    fn deal_never_repeats() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut seen = HashSet::default();

        // Two full hands and five single card replacements.
        for n in [5, 5, 1, 1, 1, 1, 1] {
            for card in deck.deal(n).unwrap() {
                assert!(seen.insert(card));
            }
        }

        assert_eq!(deck.count(), Deck::SIZE - seen.len());
    }

    #[test]
    fn deal_errors() {
        let mut deck = Deck::default();
        assert!(matches!(deck.deal(0), Err(Error::InvalidInput(_))));

        deck.deal(50).unwrap();
        assert_eq!(
            deck.deal(3),
            Err(Error::Exhausted {
                requested: 3,
                remaining: 2
            })
        );

        // Failed deals leave the deck untouched.
        assert_eq!(deck.count(), 2);
        assert_eq!(deck.deal(2).unwrap().len(), 2);
        assert!(deck.is_empty());
    }

    #[test]
    fn deck_from_cards() {
        let ks = Card::new(Rank::King, Suit::Spades);
        let th = Card::new(Rank::Ten, Suit::Hearts);

        let mut deck = Deck::from_cards(vec![ks, th]).unwrap();
        assert_eq!(deck.deal(2).unwrap(), vec![ks, th]);

        assert!(matches!(
            Deck::from_cards(vec![ks, th, ks]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn card_colors() {
        for card in Deck::default() {
            let expected = match card.suit() {
                Suit::Hearts | Suit::Diamonds => Color::Red,
                Suit::Spades | Suit::Clubs => Color::Black,
            };
            assert_eq!(card.color(), expected);
        }
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        assert_eq!(Rank::from_value(14), Some(Rank::Ace));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
        assert!(Rank::Jack.is_face_or_ace());
        assert!(!Rank::Ten.is_face_or_ace());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("KD".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("ts".parse(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!(" 2c ".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!("Q♣".parse(), Ok(Card::new(Rank::Queen, Suit::Clubs)));

        for card in Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }

        for bad in ["", "S", "1S", "11S", "AX", "A", "KDD"] {
            assert!(
                matches!(bad.parse::<Card>(), Err(Error::InvalidInput(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_after_deal() {
        let mut deck = Deck::default();
        deck.deal(2).unwrap();
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
