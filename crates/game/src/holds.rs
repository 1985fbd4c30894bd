// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Held cards.
use serde::{Deserialize, Serialize};
use std::fmt;

use drawpoker_eval::{Card, Error, Evaluation, Result, eval::HAND_SIZE};

/// The set of held hand slots, bit `n` is set when slot `n` is held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldMask(u8);

impl HoldMask {
    /// No slot held.
    pub const NONE: HoldMask = HoldMask(0);

    /// All slots held.
    pub const ALL: HoldMask = HoldMask(0b11111);

    /// The held cards suggested by an evaluation.
    ///
    /// Holds the cards that contribute to the evaluation pattern, nothing is
    /// held if no pattern matched. Straights, flushes, full houses and better
    /// hold all five cards.
    pub fn advice(hand: &[Card], eval: &Evaluation) -> Self {
        let relevant = eval.relevant(hand);
        let mut mask = HoldMask::NONE;

        for (slot, card) in hand.iter().enumerate().take(HAND_SIZE) {
            if relevant.contains(card) {
                mask.0 |= 1 << slot;
            }
        }

        mask
    }

    /// Sets or clears a slot.
    pub fn set(&mut self, slot: usize, held: bool) -> Result<()> {
        let bit = Self::bit(slot)?;
        if held {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }

        Ok(())
    }

    /// Toggles a slot, returns true if the slot is now held.
    pub fn toggle(&mut self, slot: usize) -> Result<bool> {
        self.0 ^= Self::bit(slot)?;
        Ok(self.is_held(slot))
    }

    /// Checks if a slot is held.
    pub fn is_held(&self, slot: usize) -> bool {
        slot < HAND_SIZE && self.0 & (1 << slot) != 0
    }

    /// The held slots in increasing order.
    pub fn slots(&self) -> impl Iterator<Item = usize> {
        let mask = *self;
        (0..HAND_SIZE).filter(move |slot| mask.is_held(*slot))
    }

    /// Number of held slots.
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    fn bit(slot: usize) -> Result<u8> {
        if slot < HAND_SIZE {
            Ok(1 << slot)
        } else {
            Err(Error::invalid_input(format!(
                "slot must be less than {HAND_SIZE}, got {slot}"
            )))
        }
    }
}

impl fmt::Display for HoldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in 0..HAND_SIZE {
            f.write_str(if self.is_held(slot) { "H" } else { "-" })?;
        }

        Ok(())
    }
}
