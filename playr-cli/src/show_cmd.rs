//! Show command - display bracket state

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use playr_bracket::{Bracket, Match, Participant};

use crate::store;

#[derive(Args)]
pub struct ShowArgs {
    /// Bracket JSON file
    #[arg(long, value_name = "FILE")]
    pub bracket: PathBuf,

    /// Output the raw bracket as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let bracket = store::load_bracket(&args.bracket)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bracket)?);
        return Ok(());
    }

    print_bracket(&bracket);
    Ok(())
}

pub fn print_bracket(bracket: &Bracket) {
    if bracket.rounds.is_empty() {
        println!("Empty bracket");
        return;
    }

    for round in &bracket.rounds {
        println!("{} (round {})", round.name, round.number);
        for m in &round.matches {
            println!("  {:<8} {}", m.id, describe_match(m));
        }
    }

    println!("Progress: {}%", bracket.progress());
    match bracket.champion() {
        Some(p) => println!("Champion: {}", p.name),
        None => println!("Champion: undecided"),
    }
}

fn describe_match(m: &Match) -> String {
    let a = slot_label(&m.slot_a);
    let b = slot_label(&m.slot_b);
    match (&m.winner, m.score_a, m.score_b) {
        (Some(w), Some(sa), Some(sb)) => format!("{a} vs {b}  {sa}-{sb}, {} wins", w.name),
        (Some(w), _, _) => format!("{a} vs {b}  bye, {} advances", w.name),
        _ => format!("{a} vs {b}"),
    }
}

fn slot_label(slot: &Option<Participant>) -> &str {
    slot.as_ref().map(|p| p.name.as_str()).unwrap_or("TBD")
}
