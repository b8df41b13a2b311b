//! Bracket data model and pure queries
//!
//! A `Bracket` is rounds of matches, round 1 first and the final
//! round last. Construction lives in [`crate::generate`], mutation in
//! [`crate::advance`]; everything here is read-only over the value.

use serde::{Deserialize, Serialize};

use crate::participant::Participant;

/// Lifecycle state of a single match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    /// Not decided yet; one or both slots may still be unbound
    Pending,
    /// Transitional UI state, never set by the engine itself
    InProgress,
    /// Winner recorded
    Completed,
}

/// One bracket cell: two slots, an optional decision
///
/// Serialized field names follow the product's persisted bracket
/// documents (`slotA`, `scoreA`, ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Stable id, `r{round}-p{position}`
    pub id: String,
    /// 1-indexed round number
    pub round: u32,
    /// 0-indexed slot within the round; position p feeds match p/2 of
    /// the next round (even -> slot A, odd -> slot B)
    pub position: usize,
    pub slot_a: Option<Participant>,
    pub slot_b: Option<Participant>,
    pub winner: Option<Participant>,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub status: MatchStatus,
}

impl Match {
    /// Create an empty shell for the given cell
    pub fn new(round: u32, position: usize) -> Self {
        Self {
            id: Self::id_for(round, position),
            round,
            position,
            slot_a: None,
            slot_b: None,
            winner: None,
            score_a: None,
            score_b: None,
            status: MatchStatus::Pending,
        }
    }

    /// Deterministic match id for a cell
    pub fn id_for(round: u32, position: usize) -> String {
        format!("r{round}-p{position}")
    }

    /// Both slots bound, so the match can be decided
    pub fn is_ready(&self) -> bool {
        self.slot_a.is_some() && self.slot_b.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Completed with a single bound slot and no scores, i.e. an
    /// automatic advancement recorded at construction time
    pub fn is_bye(&self) -> bool {
        self.is_completed() && self.slot_b.is_none() && self.score_a.is_none()
    }
}

/// A tournament stage: all matches sharing one round number
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    /// 1-indexed round number
    pub number: u32,
    /// Display name ("Semifinal", "Final", ...)
    pub name: String,
    pub matches: Vec<Match>,
}

/// Bracket format tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracketKind {
    SingleElimination,
}

/// The full single-elimination tree
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bracket {
    pub kind: BracketKind,
    /// Round 1 first, final round last
    pub rounds: Vec<Round>,
}

impl Bracket {
    pub fn num_rounds(&self) -> u32 {
        self.rounds.len() as u32
    }

    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    pub fn completed_matches(&self) -> usize {
        self.rounds
            .iter()
            .flat_map(|r| &r.matches)
            .filter(|m| m.is_completed())
            .count()
    }

    /// Winner of the final match, or `None` while undecided
    pub fn champion(&self) -> Option<&Participant> {
        self.rounds
            .last()
            .and_then(|r| r.matches.first())
            .and_then(|m| m.winner.as_ref())
    }

    /// Completion percentage in [0, 100], rounded; 0 for an empty bracket
    pub fn progress(&self) -> u8 {
        let total = self.total_matches();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_matches();
        (100.0 * completed as f64 / total as f64).round() as u8
    }

    /// Find a match by id
    pub fn find_match(&self, id: &str) -> Option<&Match> {
        self.rounds
            .iter()
            .flat_map(|r| &r.matches)
            .find(|m| m.id == id)
    }

    /// Locate a match by id as (round index, match index)
    pub(crate) fn locate(&self, id: &str) -> Option<(usize, usize)> {
        self.rounds.iter().enumerate().find_map(|(ri, round)| {
            round
                .matches
                .iter()
                .position(|m| m.id == id)
                .map(|mi| (ri, mi))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;

    fn roster(n: usize) -> Vec<Participant> {
        (1..=n)
            .map(|i| Participant::new(format!("p{i}"), format!("Player {i}")))
            .collect()
    }

    #[test]
    fn test_match_id_for() {
        assert_eq!(Match::id_for(1, 0), "r1-p0");
        assert_eq!(Match::id_for(3, 12), "r3-p12");
    }

    #[test]
    fn test_match_shell_is_pending() {
        let m = Match::new(2, 1);
        assert_eq!(m.status, MatchStatus::Pending);
        assert!(!m.is_ready());
        assert!(!m.is_bye());
        assert!(m.winner.is_none());
    }

    #[test]
    fn test_empty_bracket_queries() {
        let bracket = generate(&[]);
        assert_eq!(bracket.num_rounds(), 0);
        assert_eq!(bracket.total_matches(), 0);
        assert_eq!(bracket.progress(), 0);
        assert!(bracket.champion().is_none());
        assert!(bracket.find_match("r1-p0").is_none());
    }

    #[test]
    fn test_progress_fresh_even_bracket_is_zero() {
        let bracket = generate(&roster(4));
        assert_eq!(bracket.progress(), 0);
    }

    #[test]
    fn test_find_match() {
        let bracket = generate(&roster(4));
        let m = bracket.find_match("r2-p0").unwrap();
        assert_eq!(m.round, 2);
        assert_eq!(m.position, 0);
        assert!(bracket.find_match("r9-p9").is_none());
    }

    #[test]
    fn test_serialized_field_names_match_product_documents() {
        let bracket = generate(&roster(2));
        let json = serde_json::to_value(&bracket).unwrap();
        let m = &json["rounds"][0]["matches"][0];
        assert_eq!(m["id"], "r1-p0");
        assert!(m.get("slotA").is_some());
        assert!(m.get("slotB").is_some());
        assert!(m.get("scoreA").is_some());
        assert_eq!(m["status"], "pending");
        assert_eq!(json["kind"], "single-elimination");
    }
}
