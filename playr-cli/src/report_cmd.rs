//! Report command - record a match result

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use playr_bracket::advance_winner;

use crate::store;

#[derive(Args)]
pub struct ReportArgs {
    /// Bracket JSON file, rewritten in place
    #[arg(long, value_name = "FILE")]
    pub bracket: PathBuf,

    /// Match id, e.g. r1-p0
    #[arg(long = "match", value_name = "ID")]
    pub match_id: String,

    /// Winner's participant id
    #[arg(long, value_name = "PARTICIPANT_ID")]
    pub winner: String,

    /// Final score for slot A
    #[arg(long)]
    pub score_a: u32,

    /// Final score for slot B
    #[arg(long)]
    pub score_b: u32,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let mut bracket = store::load_bracket(&args.bracket)?;

    advance_winner(
        &mut bracket,
        &args.match_id,
        &args.winner,
        args.score_a,
        args.score_b,
    )
    .with_context(|| format!("recording result for match {}", args.match_id))?;

    store::save_bracket(&args.bracket, &bracket)?;

    info!(match_id = %args.match_id, winner = %args.winner, "result recorded");
    println!("Progress: {}%", bracket.progress());
    if let Some(champion) = bracket.champion() {
        println!("Champion: {}", champion.name);
    }
    Ok(())
}
