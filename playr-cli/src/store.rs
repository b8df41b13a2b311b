//! Roster and bracket JSON persistence
//!
//! The bracket file is the CLI's whole state: `create` writes it,
//! `report` rewrites it after each result, `show` only reads.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use playr_bracket::{Bracket, Participant};

/// Load a roster file: a JSON array of `{ "id", "name" }` objects in
/// seeding order.
pub fn load_roster(path: &Path) -> Result<Vec<Participant>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading roster {}", path.display()))?;
    let roster: Vec<Participant> =
        serde_json::from_str(&content).with_context(|| format!("parsing roster {}", path.display()))?;

    // Winner ids would be ambiguous with duplicate entrants.
    let mut seen: Vec<&str> = Vec::with_capacity(roster.len());
    for p in &roster {
        if seen.contains(&p.id.as_str()) {
            bail!("duplicate participant id `{}` in {}", p.id, path.display());
        }
        seen.push(&p.id);
    }

    Ok(roster)
}

pub fn load_bracket(path: &Path) -> Result<Bracket> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading bracket {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing bracket {}", path.display()))
}

pub fn save_bracket(path: &Path, bracket: &Bracket) -> Result<()> {
    let json = serde_json::to_string_pretty(bracket)?;
    fs::write(path, json).with_context(|| format!("writing bracket {}", path.display()))
}
