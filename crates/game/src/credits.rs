// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Credits and bets.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use drawpoker_eval::{Category, Error, Result};

/// Credits amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Credits(u32);

impl Credits {
    /// The zero credits.
    pub const ZERO: Credits = Credits(0);

    /// Creates credits with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl ops::AddAssign for Credits {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::SubAssign for Credits {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (idx, c) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }

        f.write_str(&out)
    }
}

/// A bet of 1 to 5 credits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bet(u32);

impl Bet {
    /// The minimum bet.
    pub const MIN: Bet = Bet(1);

    /// The maximum bet.
    pub const MAX: Bet = Bet(5);

    /// The multiplier that replaces the bet for a royal flush with max bet.
    pub const JACKPOT_MULTIPLIER: u32 = 16;

    /// Creates a bet, fails if the amount is not in the bet range.
    pub fn new(amount: u32) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&amount) {
            Ok(Bet(amount))
        } else {
            Err(Error::invalid_input(format!(
                "bet must be between {} and {}, got {amount}",
                Self::MIN.0,
                Self::MAX.0
            )))
        }
    }

    /// The bet amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// The bet as credits.
    pub fn credits(&self) -> Credits {
        Credits(self.0)
    }

    /// Checks if this is the maximum bet.
    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }

    /// The payout multiplier for a category.
    ///
    /// This is the bet amount, except for a royal flush hit with the maximum
    /// bet that pays the jackpot multiplier.
    pub fn multiplier(&self, category: Category) -> u32 {
        if self.is_max() && category == Category::RoyalFlush {
            Self::JACKPOT_MULTIPLIER
        } else {
            self.0
        }
    }

    /// The points paid for a category with this bet.
    pub fn points(&self, category: Category) -> u32 {
        category.payout().saturating_mul(self.multiplier(category))
    }
}

impl Default for Bet {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
