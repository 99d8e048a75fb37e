//! Single-elimination bracket simulator: library with models, engine and I/O collaborators.

pub mod config;
pub mod io;
pub mod logic;
pub mod models;

pub use config::RunConfig;
pub use io::{
    group_regions, load_competitors, load_competitors_from_path, write_bracket, DataError,
    RunManifest,
};
pub use logic::{
    build_bracket, build_bracket_with_policy, first_round_pairs, predict, Policy, Predictor,
};
pub use models::{
    Bracket, BracketError, BracketSummary, Competitor, CompetitorSummary, Game, Region,
    RegionGroup, Round, StatValue,
};
