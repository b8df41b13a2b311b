//! Create command - build a bracket from a roster file

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use playr_bracket::generate;

use crate::{show_cmd, store};

#[derive(Args)]
pub struct CreateArgs {
    /// Roster JSON file (array of { "id", "name" }), in seeding order
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Where to write the bracket JSON
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,

    /// Shuffle the roster before seeding (open draw instead of seeded)
    #[arg(long)]
    pub shuffle: bool,

    /// Shuffle seed, for reproducible draws
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

pub fn run(args: CreateArgs) -> Result<()> {
    let mut roster = store::load_roster(&args.roster)?;

    if args.shuffle {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        roster.shuffle(&mut rng);
    }

    let bracket = generate(&roster);
    store::save_bracket(&args.out, &bracket)?;

    info!(
        participants = roster.len(),
        rounds = bracket.num_rounds(),
        out = %args.out.display(),
        "bracket created"
    );
    show_cmd::print_bracket(&bracket);
    Ok(())
}
