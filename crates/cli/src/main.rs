// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::io;

use drawpoker_game::{Config, Machine};

pub mod report;
pub mod terminal;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a five cards hand, i.e. `drawpoker eval 10S JS QS KS AS`.
    Eval {
        /// The hand cards.
        #[clap(num_args = 5, required = true)]
        cards: Vec<String>,
        /// The bet used to compute the points.
        #[clap(
            long,
            short,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=5)
        )]
        bet: u32,
        /// Prints the evaluation as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Plays draw poker reading commands from the standard input.
    Play {
        /// The starting credits.
        #[clap(long, short, default_value_t = 100)]
        credits: u32,
        /// The bet for each round.
        #[clap(
            long,
            short,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=5)
        )]
        bet: u32,
        /// Seed for shuffling the deck.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Don't hold the cards that contribute to the dealt hand.
        #[clap(long)]
        no_auto_hold: bool,
    },
    /// Evaluates all five cards hands and prints each category frequency.
    Stats,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Eval { cards, bet, json } => report::eval_hand(&cards, bet, json, &mut stdout),
        Command::Stats => report::stats(&mut stdout),
        Command::Play {
            credits,
            bet,
            seed,
            no_auto_hold,
        } => {
            let config = Config {
                credits,
                bet,
                seed,
                auto_hold: !no_auto_hold,
            };

            let mut machine = Machine::new(config)?;
            terminal::run(&mut machine, io::stdin().lock(), &mut stdout)
        }
    }
}
