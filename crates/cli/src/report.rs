// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation and statistics reports.
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use drawpoker_eval::{Card, Category, Deck, Evaluation, eval::HAND_SIZE, evaluate};
use drawpoker_game::{Bet, round::format_cards};

#[derive(Debug, Serialize)]
struct EvalReport<'a> {
    hand: &'a [Card],
    bet: u32,
    points: u32,
    evaluation: &'a Evaluation,
}

/// Evaluates a hand and writes the result.
pub fn eval_hand(cards: &[String], bet: u32, json: bool, w: &mut impl Write) -> Result<()> {
    let hand = cards
        .iter()
        .map(|c| c.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    let eval = evaluate(&hand)?;
    let bet = Bet::new(bet)?;
    let points = bet.points(eval.category());

    if json {
        let report = EvalReport {
            hand: &hand,
            bet: bet.amount(),
            points,
            evaluation: &eval,
        };

        serde_json::to_writer_pretty(&mut *w, &report)?;
        writeln!(w)?;
    } else {
        writeln!(w, "{} - {points} points!", eval.category())?;
        if !eval.irrelevant().is_empty() {
            writeln!(w, "Irrelevant: {}", format_cards(eval.irrelevant()))?;
        }
    }

    Ok(())
}

/// Evaluates all five cards hands and writes the frequency of each category
/// and the return for a one credit bet.
pub fn stats(w: &mut impl Write) -> Result<()> {
    let mut counts = [0u64; 10];
    let mut error = None;

    Deck::default().for_each(HAND_SIZE, |hand| match evaluate(hand) {
        Ok(eval) => counts[eval.category() as usize] += 1,
        Err(e) => error = Some(e),
    });

    if let Some(e) = error {
        return Err(e.into());
    }

    let total = counts.iter().sum::<u64>();
    writeln!(w, "{:<16} {:>9} {:>9}", "Category", "Hands", "Freq")?;

    let mut paid = 0;
    for category in Category::categories().rev() {
        let count = counts[category as usize];
        paid += count * u64::from(category.payout());

        let freq = 100.0 * count as f64 / total as f64;
        writeln!(w, "{:<16} {count:>9} {freq:>8.4}%", category.name())?;
    }

    writeln!(w, "{:<16} {total:>9}", "Total")?;
    writeln!(w, "Return:          {:.4}", paid as f64 / total as f64)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cards: &str) -> Vec<String> {
        cards.split_whitespace().map(String::from).collect()
    }

    fn eval_output(cards: &str, bet: u32, json: bool) -> Result<String> {
        let mut out = Vec::new();
        eval_hand(&args(cards), bet, json, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn eval_text() {
        let out = eval_output("JS JD 3C 7H 9S", 2, false).unwrap();
        assert_eq!(out, "Jacks Or Better - 2 points!\nIrrelevant: 3C 7H 9S\n");

        let out = eval_output("10S JS QS KS AS", 5, false).unwrap();
        assert_eq!(out, "Royal Flush - 4000 points!\n");

        let out = eval_output("9S 9D 3C 7H 2S", 1, false).unwrap();
        assert_eq!(out, "Loss - 0 points!\nIrrelevant: 3C 7H 2S\n");
    }

    #[test]
    fn eval_json() {
        let out = eval_output("4S 4D 4C 9H 9S", 3, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["points"], 27);
        assert_eq!(value["bet"], 3);
        assert_eq!(value["evaluation"]["category"], "FullHouse");
        assert_eq!(value["evaluation"]["pattern"], "FullHouse");
        assert_eq!(value["evaluation"]["irrelevant"].as_array().unwrap().len(), 0);
        assert_eq!(value["hand"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn eval_errors() {
        assert!(eval_output("JS JD 3C 7H", 1, false).is_err());
        assert!(eval_output("JS JD 3C 7H 1X", 1, false).is_err());
        assert!(eval_output("JS JD 3C 7H 9S", 6, false).is_err());
    }
}
