//! Error taxonomy for caller-contract violations
//!
//! The engine has no I/O, so nothing here is retryable: every variant
//! means the caller handed in something inconsistent with the bracket
//! it holds, and the offending call changed nothing.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BracketError {
    /// No match with this id exists in the bracket
    #[error("no match `{id}` in this bracket")]
    UnknownMatch { id: String },

    /// The match cannot be decided yet: an opponent slot is unbound
    #[error("match `{id}` is not ready, an opponent slot is still unbound")]
    IncompleteMatch { id: String },

    /// The declared winner is not one of the match's participants
    #[error("participant `{winner}` is not playing in match `{id}`")]
    InvalidWinner { id: String, winner: String },

    /// The match was already decided for someone else
    #[error("match `{id}` was already decided for `{winner}`")]
    MatchAlreadyDecided { id: String, winner: String },
}
