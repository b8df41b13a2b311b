//! Winner recording and propagation
//!
//! `advance_winner` is the only mutation the engine exposes. It
//! validates every precondition before touching the bracket, so a
//! rejected call leaves the value exactly as it was.

use tracing::debug;

use crate::bracket::{Bracket, MatchStatus};
use crate::error::BracketError;
use crate::participant::Participant;

/// Record the outcome of one match and bind the winner into its
/// feeder slot in the next round.
///
/// The winner is named by participant id and resolved against the
/// match's own slots, so the value stored downstream is always the
/// one seeded into the bracket. Position p of round r feeds match
/// p/2 of round r+1: even positions fill slot A, odd positions slot
/// B. The final round has no feeder, and the target match is never
/// auto-decided even once both of its slots are bound.
///
/// A match already decided for the same participant may be advanced
/// again: the call is idempotent and still performs the propagation.
/// That is also how a construction-time bye reaches round 2. A
/// different winner on a decided match is rejected - decisions are
/// immutable.
pub fn advance_winner(
    bracket: &mut Bracket,
    match_id: &str,
    winner_id: &str,
    score_a: u32,
    score_b: u32,
) -> Result<(), BracketError> {
    let num_rounds = bracket.num_rounds();

    let (round_idx, match_idx) = bracket
        .locate(match_id)
        .ok_or_else(|| BracketError::UnknownMatch {
            id: match_id.to_string(),
        })?;

    // Validate before mutating anything.
    let (winner, record_scores) = {
        let m = &bracket.rounds[round_idx].matches[match_idx];
        let winner = match (&m.slot_a, &m.slot_b) {
            (Some(a), _) if a.id == winner_id => a.clone(),
            (_, Some(b)) if b.id == winner_id => b.clone(),
            (Some(_), Some(_)) => {
                return Err(BracketError::InvalidWinner {
                    id: m.id.clone(),
                    winner: winner_id.to_string(),
                })
            }
            _ => {
                return Err(BracketError::IncompleteMatch { id: m.id.clone() });
            }
        };
        if let Some(decided) = &m.winner {
            if decided.id != winner.id {
                return Err(BracketError::MatchAlreadyDecided {
                    id: m.id.clone(),
                    winner: decided.id.clone(),
                });
            }
        }
        if m.is_ready() {
            (winner, true)
        } else if m.is_bye() {
            // Re-advancing a bye only propagates; the bye itself keeps
            // its no-score record.
            (winner, false)
        } else {
            return Err(BracketError::IncompleteMatch { id: m.id.clone() });
        }
    };

    let (round_number, position) = {
        let m = &mut bracket.rounds[round_idx].matches[match_idx];
        if record_scores {
            m.winner = Some(winner.clone());
            m.score_a = Some(score_a);
            m.score_b = Some(score_b);
            m.status = MatchStatus::Completed;
        }
        (m.round, m.position)
    };

    if round_number < num_rounds {
        bind_feeder_slot(bracket, round_idx, position, winner);
    }

    Ok(())
}

/// Bind a winner into the slot it feeds in the next round
fn bind_feeder_slot(bracket: &mut Bracket, round_idx: usize, position: usize, winner: Participant) {
    let target = &mut bracket.rounds[round_idx + 1].matches[position / 2];
    debug!(
        winner = %winner.id,
        target = %target.id,
        slot = if position % 2 == 0 { "A" } else { "B" },
        "advancing winner"
    );
    if position % 2 == 0 {
        target.slot_a = Some(winner);
    } else {
        target.slot_b = Some(winner);
    }
}
