//! Data structures for the bracket: competitors, regions, games, rounds, errors.

mod bracket;
mod competitor;
mod error;

pub use bracket::{
    round_name, Bracket, BracketSummary, Game, GameSummary, GroupSummary, RegionGroup, Round,
    RoundSummary, REGIONAL_ROUNDS, TOTAL_ROUNDS,
};
pub use competitor::{Competitor, CompetitorSummary, Region, StatValue};
pub use error::BracketError;
