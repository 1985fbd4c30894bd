// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A draw poker round.
use log::debug;
use rand::prelude::*;

use drawpoker_eval::{Card, Deck, Error, Evaluation, Result, eval::HAND_SIZE, evaluate};

use crate::{Bet, HoldMask};

/// The round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Five cards have been dealt, the player can choose the cards to hold.
    Dealt,
    /// The non held cards have been replaced and the hand has been paid.
    Drawn,
}

/// A round of draw poker.
///
/// Each round uses a new deck, the hand is dealt from the front of the deck and
/// the cards that are not held are replaced by the next cards in the deck.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    hand: Vec<Card>,
    holds: HoldMask,
    eval: Evaluation,
    bet: Bet,
    phase: Phase,
    payout: u32,
}

impl Round {
    /// Deals a hand from a new shuffled deck.
    ///
    /// If `auto_hold` is set the cards that contribute to the hand pattern are
    /// held.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, bet: Bet, auto_hold: bool) -> Result<Self> {
        Self::with_deck(Deck::new_and_shuffled(rng), bet, auto_hold)
    }

    /// Deals a hand from the given deck.
    pub fn with_deck(mut deck: Deck, bet: Bet, auto_hold: bool) -> Result<Self> {
        let hand = deck.deal(HAND_SIZE)?;
        let eval = evaluate(&hand)?;

        let holds = if auto_hold {
            HoldMask::advice(&hand, &eval)
        } else {
            HoldMask::NONE
        };

        debug!(
            "Dealt {} {:?} holds {holds}",
            format_cards(&hand),
            eval.category()
        );

        Ok(Self {
            deck,
            hand,
            holds,
            eval,
            bet,
            phase: Phase::Dealt,
            payout: 0,
        })
    }

    /// The round phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The hand cards.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The held slots.
    pub fn holds(&self) -> HoldMask {
        self.holds
    }

    /// The round bet.
    pub fn bet(&self) -> Bet {
        self.bet
    }

    /// The evaluation of the current hand.
    pub fn evaluation(&self) -> &Evaluation {
        &self.eval
    }

    /// Number of cards left in the deck.
    pub fn cards_left(&self) -> usize {
        self.deck.count()
    }

    /// The points won, this is zero until the round is drawn.
    pub fn payout(&self) -> u32 {
        self.payout
    }

    /// The points the current hand pays with the round bet.
    pub fn points(&self) -> u32 {
        self.bet.points(self.eval.category())
    }

    /// Sets or clears a held slot.
    pub fn set_hold(&mut self, slot: usize, held: bool) -> Result<()> {
        self.check_dealt()?;
        self.holds.set(slot, held)
    }

    /// Toggles a held slot, returns true if the slot is now held.
    pub fn toggle_hold(&mut self, slot: usize) -> Result<bool> {
        self.check_dealt()?;
        self.holds.toggle(slot)
    }

    /// Replaces the cards that are not held and evaluates the final hand.
    ///
    /// Returns the points won.
    pub fn draw(&mut self) -> Result<u32> {
        self.check_dealt()?;

        let slots = (0..HAND_SIZE)
            .filter(|slot| !self.holds.is_held(*slot))
            .collect::<Vec<_>>();

        if !slots.is_empty() {
            let cards = self.deck.deal(slots.len())?;
            for (slot, card) in slots.into_iter().zip(cards) {
                self.hand[slot] = card;
            }
        }

        self.eval = evaluate(&self.hand)?;
        self.payout = self.points();
        self.phase = Phase::Drawn;

        debug!(
            "Drawn {} {:?} payout {}",
            format_cards(&self.hand),
            self.eval.category(),
            self.payout
        );

        Ok(self.payout)
    }

    /// The cards to dim after the draw.
    ///
    /// These are the cards that don't contribute to a winning hand, there are
    /// no cards to dim before the draw or for a losing hand.
    pub fn dimmed(&self) -> Vec<Card> {
        if self.phase == Phase::Drawn && self.eval.category().is_win() {
            self.eval.irrelevant().to_vec()
        } else {
            Vec::new()
        }
    }

    fn check_dealt(&self) -> Result<()> {
        if self.phase == Phase::Dealt {
            Ok(())
        } else {
            Err(Error::invalid_input("the round has already been drawn"))
        }
    }
}

/// Formats cards separated by spaces.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use drawpoker_eval::Category;

    fn cards(cards: &str) -> Vec<Card> {
        cards
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    /// A deck that deals the given cards first.
    fn stacked(first: &str) -> Deck {
        let first = cards(first);
        let rest = Deck::default().into_iter().filter(|c| !first.contains(c));
        Deck::from_cards(first.iter().copied().chain(rest).collect()).unwrap()
    }

    #[test]
    fn deal_and_draw() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut round = Round::deal(&mut rng, Bet::MIN, false).unwrap();
        assert_eq!(round.phase(), Phase::Dealt);
        assert_eq!(round.hand().len(), HAND_SIZE);
        assert_eq!(round.cards_left(), Deck::SIZE - HAND_SIZE);
        assert_eq!(round.holds(), HoldMask::NONE);
        assert_eq!(round.payout(), 0);

        let first = round.hand().to_vec();
        round.set_hold(0, true).unwrap();
        round.set_hold(2, true).unwrap();
        let points = round.draw().unwrap();

        assert_eq!(round.phase(), Phase::Drawn);
        assert_eq!(round.cards_left(), Deck::SIZE - HAND_SIZE - 3);
        assert_eq!(round.hand()[0], first[0]);
        assert_eq!(round.hand()[2], first[2]);
        assert_eq!(points, round.payout());
        assert_eq!(points, round.evaluation().points(1));

        // Replaced cards are never cards already dealt.
        let dealt = first
            .iter()
            .chain(round.hand())
            .copied()
            .collect::<HashSet<_>>();
        assert_eq!(dealt.len(), HAND_SIZE + 3);
    }

    #[test]
    fn draw_all_held() {
        let mut round = Round::with_deck(stacked("10S JS QS KS AS"), Bet::MAX, false).unwrap();
        assert_eq!(round.evaluation().category(), Category::RoyalFlush);
        assert_eq!(round.points(), 4_000);

        for slot in 0..HAND_SIZE {
            assert!(round.toggle_hold(slot).unwrap());
        }

        assert_eq!(round.draw().unwrap(), 4_000);
        assert_eq!(round.hand(), cards("10S JS QS KS AS"));
        assert_eq!(round.cards_left(), Deck::SIZE - HAND_SIZE);
        assert!(round.dimmed().is_empty());
    }

    #[test]
    fn auto_hold_and_dim() {
        let deck = stacked("3C JS 7H JD 9S 4H 2D 8C");
        let mut round = Round::with_deck(deck, Bet::new(2).unwrap(), true).unwrap();
        assert_eq!(round.evaluation().category(), Category::JacksOrBetter);
        assert_eq!(round.holds().to_string(), "-H-H-");
        assert!(round.dimmed().is_empty());

        assert_eq!(round.draw().unwrap(), 2);
        assert_eq!(round.hand(), cards("4H JS 2D JD 8C"));
        assert_eq!(round.dimmed(), cards("4H 2D 8C"));
    }

    #[test]
    fn losing_hand_is_not_dimmed() {
        let deck = stacked("9S 3C 9D 7H 2S 4H 5D 8C");
        let mut round = Round::with_deck(deck, Bet::MIN, true).unwrap();
        assert_eq!(round.evaluation().category(), Category::Loss);
        assert_eq!(round.holds().to_string(), "H-H--");

        assert_eq!(round.draw().unwrap(), 0);
        assert_eq!(round.hand(), cards("9S 4H 9D 5D 8C"));
        assert!(round.dimmed().is_empty());
    }

    #[test]
    fn draw_only_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut round = Round::deal(&mut rng, Bet::MIN, true).unwrap();
        round.draw().unwrap();

        let hand = round.hand().to_vec();
        assert!(matches!(round.draw(), Err(Error::InvalidInput(_))));
        assert!(matches!(round.set_hold(0, true), Err(Error::InvalidInput(_))));
        assert!(matches!(round.toggle_hold(0), Err(Error::InvalidInput(_))));
        assert_eq!(round.hand(), hand);
    }

    #[test]
    fn invalid_slot() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::deal(&mut rng, Bet::MIN, false).unwrap();
        assert!(matches!(round.set_hold(5, true), Err(Error::InvalidInput(_))));
        assert_eq!(round.holds(), HoldMask::NONE);
    }

    #[test]
    fn cards_formatting() {
        assert_eq!(format_cards(&cards("10S jd 2c")), "10S JD 2C");
        assert_eq!(format_cards(&[]), "");
    }
}
