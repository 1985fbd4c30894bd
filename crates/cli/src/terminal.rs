// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, anyhow, bail};
use crossterm::style::{StyledContent, Stylize};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use drawpoker_eval::{Card, Color, eval::HAND_SIZE};
use drawpoker_game::{Machine, Phase};

/// A player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deals if no round is in progress, draws otherwise.
    Next,
    /// Deals a new round.
    Deal,
    /// Toggles the given slots.
    Hold(Vec<usize>),
    /// Draws the current round.
    Draw,
    /// Changes the bet.
    Bet(u32),
    /// Prints the commands.
    Help,
    /// Exits the game.
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Next);
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            "d" | "deal" => Command::Deal,
            "r" | "draw" => Command::Draw,
            "h" | "hold" => {
                let slots = words.by_ref().map(parse_slot).collect::<Result<Vec<_>>>()?;
                if slots.is_empty() {
                    bail!("hold needs one or more slots between 1 and 5");
                }

                Command::Hold(slots)
            }
            "b" | "bet" => {
                let amount = words.next().ok_or_else(|| anyhow!("missing bet amount"))?;
                Command::Bet(amount.parse()?)
            }
            "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => bail!("unknown command {other:?}, type help for the commands list"),
        };

        if words.next().is_some() {
            bail!("too many arguments for {name:?}");
        }

        Ok(cmd)
    }
}

/// Parses a one based slot number.
fn parse_slot(word: &str) -> Result<usize> {
    match word.parse::<usize>() {
        Ok(slot @ 1..=5) => Ok(slot - 1),
        _ => bail!("invalid slot {word:?}, slots are between 1 and 5"),
    }
}

/// Runs the game loop until the input ends or the player quits.
pub fn run<R: BufRead>(machine: &mut Machine, input: R, w: &mut impl Write) -> Result<()> {
    print_help(w)?;
    print_credits(w, machine)?;

    for line in input.lines() {
        let cmd = match line?.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(w, "{e}")?;
                continue;
            }
        };

        let res = match cmd {
            Command::Quit => break,
            Command::Help => {
                print_help(w)?;
                continue;
            }
            Command::Next if machine.in_progress() => machine.draw().map(|_| ()),
            Command::Next | Command::Deal => machine.deal().map(|_| ()),
            Command::Draw => machine.draw().map(|_| ()),
            Command::Hold(slots) => slots
                .into_iter()
                .try_for_each(|slot| machine.toggle_hold(slot).map(|_| ())),
            Command::Bet(amount) => machine.set_bet(amount),
        };

        match res {
            Ok(()) => print_round(w, machine)?,
            Err(e) => writeln!(w, "{e}")?,
        }
    }

    writeln!(w, "Bye, you leave with {} credits", machine.credits())?;
    w.flush()?;

    Ok(())
}

fn print_help(w: &mut impl Write) -> Result<()> {
    writeln!(w, "Commands:")?;
    writeln!(w, "  <enter>         deal or draw")?;
    writeln!(w, "  d, deal         deal a new hand")?;
    writeln!(w, "  h, hold <1..5>  toggle held cards")?;
    writeln!(w, "  r, draw         replace the cards that are not held")?;
    writeln!(w, "  b, bet <1..5>   change the bet")?;
    writeln!(w, "  ?, help         print this help")?;
    writeln!(w, "  q, quit         leave the game")?;
    Ok(())
}

fn print_credits(w: &mut impl Write, machine: &Machine) -> Result<()> {
    writeln!(w, "Credits: {}  Bet: {}", machine.credits(), machine.bet())?;
    Ok(())
}

fn print_round(w: &mut impl Write, machine: &Machine) -> Result<()> {
    let Some(round) = machine.round() else {
        return print_credits(w, machine);
    };

    let dimmed = round.dimmed();
    let cards = round
        .hand()
        .iter()
        .map(|c| styled_card(*c, dimmed.contains(c)).to_string())
        .collect::<Vec<_>>();
    writeln!(w, "{}", cards.join(" "))?;

    if round.phase() == Phase::Dealt {
        let holds = round.holds();
        if holds.count() == 0 {
            writeln!(w, "No cards held")?;
        } else {
            let mut labels = [""; HAND_SIZE];
            for slot in holds.slots() {
                labels[slot] = "HELD";
            }

            let labels = labels.map(|label| format!("{label:^4}"));
            writeln!(w, "{}", labels.join(" "))?;
        }
    }

    if let Some(summary) = machine.summary() {
        writeln!(w, "{summary}")?;
    }

    print_credits(w, machine)
}

fn styled_card(card: Card, dimmed: bool) -> StyledContent<String> {
    let text = format!("{:>3}{}", card.rank().to_string(), card.suit().symbol());
    let text = match card.color() {
        Color::Red => text.red(),
        Color::Black => text.white(),
    };

    if dimmed { text.dim() } else { text.bold() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_game::Config;
    use std::io::Cursor;

    fn machine(credits: u32) -> Machine {
        Machine::new(Config {
            credits,
            bet: 1,
            seed: Some(99),
            auto_hold: true,
        })
        .unwrap()
    }

    fn play(machine: &mut Machine, input: &str) -> String {
        let mut out = Vec::new();
        run(machine, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!("".parse::<Command>().unwrap(), Command::Next);
        assert_eq!("  ".parse::<Command>().unwrap(), Command::Next);
        assert_eq!("deal".parse::<Command>().unwrap(), Command::Deal);
        assert_eq!("R".parse::<Command>().unwrap(), Command::Draw);
        assert_eq!("hold 1 5".parse::<Command>().unwrap(), Command::Hold(vec![0, 4]));
        assert_eq!("b 5".parse::<Command>().unwrap(), Command::Bet(5));
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);

        for bad in ["hold", "hold 0", "hold 6", "hold x", "bet", "bet x", "deal 1", "fold"] {
            assert!(bad.parse::<Command>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn play_rounds() {
        let mut machine = machine(10);
        let out = play(&mut machine, "deal\nhold 1\ndraw\n\n\nquit\n");

        assert!(out.starts_with("Commands:"));
        assert!(out.contains("Credits: 10  Bet: 1"));
        assert!(!machine.in_progress());
        assert_eq!(machine.round().unwrap().phase(), Phase::Drawn);
        assert!(out.ends_with(&format!(
            "Bye, you leave with {} credits\n",
            machine.credits()
        )));
    }

    #[test]
    fn held_line() {
        let mut machine = Machine::new(Config {
            credits: 10,
            bet: 1,
            seed: Some(99),
            auto_hold: false,
        })
        .unwrap();

        let out = play(&mut machine, "deal\n");
        assert!(out.contains("No cards held\n"));

        let out = play(&mut machine, "hold 2 4\n");
        assert!(out.contains("     HELD      HELD     \n"));
        assert_eq!(machine.round().unwrap().holds().count(), 2);
    }

    #[test]
    fn errors_keep_playing() {
        let mut machine = machine(1);
        let out = play(&mut machine, "draw\nfold\nbet 2\ndeal\nbet 1\ndeal\nbet 3\n");

        assert!(out.contains("no round in progress"));
        assert!(out.contains("unknown command \"fold\""));
        assert!(out.contains("not enough credits 1 for bet 2"));
        assert!(out.contains("cannot change bet during a round"));
        assert!(machine.in_progress());
        assert_eq!(machine.credits().amount(), 0);
    }
}
