//! Bracket construction from a seeded roster

use tracing::debug;

use crate::bracket::{Bracket, BracketKind, Match, MatchStatus, Round};
use crate::participant::Participant;

/// Build a single-elimination bracket from a roster in seeding order.
///
/// The input order is significant: participants are paired as they
/// come, so index 0 is slot A of `r1-p0`, index 1 its opponent, and
/// so on. An odd roster leaves the trailing seed without an opponent;
/// that match is resolved immediately as a bye (winner set, no
/// scores). Rounds past the first are empty shells - a bye reaches
/// round 2 only through an explicit [`crate::advance_winner`] call.
///
/// Total by construction: an empty roster yields a bracket with zero
/// rounds rather than an error.
pub fn generate(participants: &[Participant]) -> Bracket {
    let n = participants.len();
    if n == 0 {
        return Bracket {
            kind: BracketKind::SingleElimination,
            rounds: Vec::new(),
        };
    }

    let num_rounds = num_rounds_for(n);
    let mut rounds = Vec::with_capacity(num_rounds as usize);

    // Round 1: consume the roster pairwise in seeding order.
    let mut matches = Vec::with_capacity(n.div_ceil(2));
    for (position, pair) in participants.chunks(2).enumerate() {
        let mut m = Match::new(1, position);
        m.slot_a = Some(pair[0].clone());
        match pair.get(1) {
            Some(p) => m.slot_b = Some(p.clone()),
            None => {
                // Unpaired trailing seed advances on a bye.
                m.winner = Some(pair[0].clone());
                m.status = MatchStatus::Completed;
            }
        }
        matches.push(m);
    }

    let mut count = matches.len();
    rounds.push(Round {
        number: 1,
        name: round_name(1, num_rounds),
        matches,
    });

    // Later rounds are shells: slots stay unbound until winners are
    // advanced into them.
    for number in 2..=num_rounds {
        count = count.div_ceil(2);
        rounds.push(Round {
            number,
            name: round_name(number, num_rounds),
            matches: (0..count).map(|p| Match::new(number, p)).collect(),
        });
    }

    debug!(
        participants = n,
        rounds = num_rounds,
        "generated single-elimination bracket"
    );

    Bracket {
        kind: BracketKind::SingleElimination,
        rounds,
    }
}

/// Number of rounds for `n` participants: `ceil(log2(n))`, with the
/// degenerate single-participant roster still getting one round
fn num_rounds_for(n: usize) -> u32 {
    if n <= 1 {
        n as u32
    } else {
        (n - 1).ilog2() + 1
    }
}

/// Display name for a round, by distance to the final
fn round_name(number: u32, num_rounds: u32) -> String {
    match num_rounds - number + 1 {
        1 => "Final".to_string(),
        2 => "Semifinal".to_string(),
        3 => "Quarterfinal".to_string(),
        4 => "Round of 16".to_string(),
        5 => "Round of 32".to_string(),
        _ => format!("Round {number}"),
    }
}
