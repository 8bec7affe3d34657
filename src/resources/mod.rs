//! Typed PandaScore resources and the queries that fetch them.

pub mod endpoints;
pub mod types;

pub use types::{League, Match, MatchOpponent, Opponent, Series};
