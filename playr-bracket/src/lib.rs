//! PlayR Bracket - single-elimination tournament engine
//!
//! This crate provides the bracket core for PlayR:
//! - Bracket construction from a seeded roster, with bye handling
//! - Winner recording and one-hop propagation into the next round
//! - Champion and completion-progress queries
//!
//! The engine is pure and synchronous. Callers own the roster and the
//! persisted bracket value; the engine only transforms it in memory
//! and never performs I/O. Concurrent writers against the same
//! bracket must be serialized by the caller.

pub mod advance;
pub mod bracket;
pub mod error;
pub mod generate;
pub mod participant;

// Re-exports for convenient access
pub use advance::advance_winner;
pub use bracket::{Bracket, BracketKind, Match, MatchStatus, Round};
pub use error::BracketError;
pub use generate::generate;
pub use participant::Participant;
