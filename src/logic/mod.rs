//! Bracket logic: seeding, outcome prediction, round-by-round resolution.

mod engine;
mod predictor;
mod seeding;

pub use engine::{build_bracket, build_bracket_with_policy};
pub use predictor::{
    predict, Policy, Predictor, RankPoints, SeedOnly, StatsWithSeedBonus, RANK_STATS, RAW_STATS,
};
pub use seeding::{
    first_round_pairs, seat_region, slot_order, validate_regions, validate_stats,
    MAX_TEAMS_PER_REGION, REGION_COUNT,
};
