// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A draw poker machine.
use log::info;
use rand::prelude::*;

use drawpoker_eval::{Error, Result};

use crate::{Bet, Credits, Phase, Round};

/// The machine configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The starting credits.
    pub credits: u32,
    /// The bet for each round.
    pub bet: u32,
    /// Seed for the shuffling random generator, uses entropy if not set.
    pub seed: Option<u64>,
    /// Holds the cards that contribute to the dealt hand.
    pub auto_hold: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credits: 100,
            bet: 1,
            seed: None,
            auto_hold: true,
        }
    }
}

/// A draw poker machine that tracks the player credits.
#[derive(Debug)]
pub struct Machine {
    credits: Credits,
    bet: Bet,
    auto_hold: bool,
    rng: StdRng,
    round: Option<Round>,
}

impl Machine {
    /// Creates a new machine.
    pub fn new(config: Config) -> Result<Self> {
        let bet = Bet::new(config.bet)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            credits: Credits::new(config.credits),
            bet,
            auto_hold: config.auto_hold,
            rng,
            round: None,
        })
    }

    /// The player credits.
    pub fn credits(&self) -> Credits {
        self.credits
    }

    /// The bet for the next round.
    pub fn bet(&self) -> Bet {
        self.bet
    }

    /// The current or last round.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Checks if a round has been dealt and not drawn yet.
    pub fn in_progress(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|r| r.phase() == Phase::Dealt)
    }

    /// Changes the bet, fails during a round.
    pub fn set_bet(&mut self, amount: u32) -> Result<()> {
        if self.in_progress() {
            return Err(Error::invalid_input("cannot change bet during a round"));
        }

        self.bet = Bet::new(amount)?;
        Ok(())
    }

    /// Pays the bet and deals a new round.
    pub fn deal(&mut self) -> Result<&Round> {
        if self.in_progress() {
            return Err(Error::invalid_input("a round is already in progress"));
        }

        if self.credits < self.bet.credits() {
            return Err(Error::invalid_input(format!(
                "not enough credits {} for bet {}",
                self.credits, self.bet
            )));
        }

        let round = Round::deal(&mut self.rng, self.bet, self.auto_hold)?;
        self.credits -= self.bet.credits();

        info!("Bet {} credits {}", self.bet, self.credits);
        Ok(self.round.insert(round))
    }

    /// Sets or clears a held slot in the current round.
    pub fn set_hold(&mut self, slot: usize, held: bool) -> Result<()> {
        self.current_round()?.set_hold(slot, held)
    }

    /// Toggles a held slot in the current round.
    pub fn toggle_hold(&mut self, slot: usize) -> Result<bool> {
        self.current_round()?.toggle_hold(slot)
    }

    /// Draws the current round and credits the points won.
    pub fn draw(&mut self) -> Result<u32> {
        let round = self.current_round()?;
        let points = round.draw()?;
        let category = round.evaluation().category();

        self.credits += Credits::new(points);

        info!("{category} won {points} credits {}", self.credits);
        Ok(points)
    }

    /// The round result line.
    ///
    /// Before the draw there is a result only for a winning hand.
    pub fn summary(&self) -> Option<String> {
        let round = self.round.as_ref()?;
        let category = round.evaluation().category();

        match round.phase() {
            Phase::Dealt if !category.is_win() => None,
            Phase::Dealt => Some(format!("{category} - {} points!", round.points())),
            Phase::Drawn => Some(format!("{category} - {} points!", round.payout())),
        }
    }

    fn current_round(&mut self) -> Result<&mut Round> {
        match self.round.as_mut() {
            Some(round) if round.phase() == Phase::Dealt => Ok(round),
            _ => Err(Error::invalid_input("no round in progress")),
        }
    }
}
