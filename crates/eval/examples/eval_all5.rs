// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.412s
// Hands/sec:       6308155
//
// Loss:            2062860
// Jacks Or Better: 337920
// Two Pair:        123552
// Three Of A Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four Of A Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```

use std::time::Instant;

use drawpoker_eval::*;

fn main() -> Result<()> {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 10];
    let mut error = None;

    Deck::default().for_each(eval::HAND_SIZE, |hand| match evaluate(hand) {
        Ok(eval) => counts[eval.category() as usize] += 1,
        Err(e) => error = Some(e),
    });

    if let Some(e) = error {
        return Err(e);
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories() {
        let name = format!("{category}:");
        println!("{name:<17}{}", counts[category as usize]);
    }

    Ok(())
}
