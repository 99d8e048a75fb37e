//! Outcome prediction: pick the winner of a single game under a fixed policy.
//!
//! Every policy is pure. Point-based policies fall back to the seed rule on a tie,
//! so a bracket never depends on anything but its inputs.

use crate::models::{BracketError, Competitor};
use std::str::FromStr;

/// Chooses a winner between two competitors.
pub trait Predictor {
    /// Identifier recorded on the bracket.
    fn name(&self) -> &'static str;

    /// Stats every record must carry as numbers before this predictor can run.
    fn required_stats(&self) -> Vec<&'static str>;

    /// Winner of `a` vs `b`; always one of the two arguments.
    fn pick<'a>(
        &self,
        a: &'a Competitor,
        b: &'a Competitor,
    ) -> Result<&'a Competitor, BracketError>;
}

/// Selectable prediction policy (one value per run).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Policy {
    Seed,
    RankPoints,
    FullStatsWithSeedBonus,
    RawStatsWithSeedBonus,
}

impl Policy {
    pub const ALL: [Policy; 4] = [
        Policy::Seed,
        Policy::RankPoints,
        Policy::FullStatsWithSeedBonus,
        Policy::RawStatsWithSeedBonus,
    ];

    /// Map a numeric id (1..=4) to its policy.
    pub fn from_id(id: u32) -> Result<Self, BracketError> {
        match id {
            1 => Ok(Policy::Seed),
            2 => Ok(Policy::RankPoints),
            3 => Ok(Policy::FullStatsWithSeedBonus),
            4 => Ok(Policy::RawStatsWithSeedBonus),
            other => Err(BracketError::InvalidPolicy(other.to_string())),
        }
    }

    pub fn id(self) -> u32 {
        match self {
            Policy::Seed => 1,
            Policy::RankPoints => 2,
            Policy::FullStatsWithSeedBonus => 3,
            Policy::RawStatsWithSeedBonus => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Policy::Seed => "seed",
            Policy::RankPoints => "rank-points",
            Policy::FullStatsWithSeedBonus => "full-stats-with-seed-bonus",
            Policy::RawStatsWithSeedBonus => "raw-stats-with-seed-bonus",
        }
    }

    /// Concrete predictor for this policy.
    pub fn predictor(self) -> Box<dyn Predictor> {
        match self {
            Policy::Seed => Box::new(SeedOnly),
            Policy::RankPoints => Box::new(RankPoints),
            Policy::FullStatsWithSeedBonus => Box::new(StatsWithSeedBonus::full()),
            Policy::RawStatsWithSeedBonus => Box::new(StatsWithSeedBonus::raw()),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the numeric id or the policy name.
impl FromStr for Policy {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u32>() {
            return Policy::from_id(id);
        }
        Policy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BracketError::InvalidPolicy(s.to_string()))
    }
}

/// Resolve one game by numeric policy id.
pub fn predict<'a>(
    a: &'a Competitor,
    b: &'a Competitor,
    policy_id: u32,
) -> Result<&'a Competitor, BracketError> {
    Policy::from_id(policy_id)?.predictor().pick(a, b)
}

/// Ordinal rank columns; lower is better.
pub const RANK_STATS: [&str; 9] = [
    "Rank",
    "AdjORank",
    "AdjDRank",
    "AdjTRank",
    "LuckRank",
    "SOSAdjEMRank",
    "OppORank",
    "OppDRank",
    "NCSOSAdjEMRank",
];

/// Raw magnitude columns.
pub const RAW_STATS: [&str; 9] = [
    "AdjEM",
    "AdjO",
    "AdjD",
    "AdjT",
    "Luck",
    "SOSAdjEM",
    "OppO",
    "OppD",
    "NCSOSAdjEM",
];

/// Raw stats where a smaller number is the stronger team (points allowed).
const LOWER_IS_BETTER_RAW: [&str; 2] = ["AdjD", "OppD"];

fn lower_is_better(stat: &str) -> bool {
    stat.ends_with("Rank") || LOWER_IS_BETTER_RAW.contains(&stat)
}

fn numeric_stat(c: &Competitor, stat: &str) -> Result<f64, BracketError> {
    c.stat(stat).ok_or_else(|| BracketError::MissingStat {
        team: c.team.clone(),
        stat: stat.to_string(),
    })
}

/// Points for (a, b): one per stat to whichever side compares better. Equal values score nothing.
fn stat_points(
    a: &Competitor,
    b: &Competitor,
    stats: &[&str],
    better: impl Fn(&str, f64, f64) -> bool,
) -> Result<(u32, u32), BracketError> {
    let mut points = (0, 0);
    for &stat in stats {
        let va = numeric_stat(a, stat)?;
        let vb = numeric_stat(b, stat)?;
        if better(stat, va, vb) {
            points.0 += 1;
        } else if better(stat, vb, va) {
            points.1 += 1;
        }
    }
    Ok(points)
}

fn by_seed<'a>(a: &'a Competitor, b: &'a Competitor) -> &'a Competitor {
    if a.seed <= b.seed {
        a
    } else {
        b
    }
}

fn by_points<'a>(a: &'a Competitor, b: &'a Competitor, points: (u32, u32)) -> &'a Competitor {
    match points.0.cmp(&points.1) {
        std::cmp::Ordering::Greater => a,
        std::cmp::Ordering::Less => b,
        std::cmp::Ordering::Equal => by_seed(a, b),
    }
}

/// Lower seed wins; equal seeds (different regions) go to team A.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedOnly;

impl Predictor for SeedOnly {
    fn name(&self) -> &'static str {
        Policy::Seed.name()
    }

    fn required_stats(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn pick<'a>(
        &self,
        a: &'a Competitor,
        b: &'a Competitor,
    ) -> Result<&'a Competitor, BracketError> {
        Ok(by_seed(a, b))
    }
}

/// One point per rank column to the lower (better) rank.
#[derive(Clone, Copy, Debug, Default)]
pub struct RankPoints;

impl Predictor for RankPoints {
    fn name(&self) -> &'static str {
        Policy::RankPoints.name()
    }

    fn required_stats(&self) -> Vec<&'static str> {
        RANK_STATS.to_vec()
    }

    fn pick<'a>(
        &self,
        a: &'a Competitor,
        b: &'a Competitor,
    ) -> Result<&'a Competitor, BracketError> {
        let points = stat_points(a, b, &RANK_STATS, |_, x, y| x < y)?;
        Ok(by_points(a, b, points))
    }
}

/// Per-stat points in each stat's own direction, plus one bonus point for a 1 or 2 seed.
#[derive(Clone, Debug)]
pub struct StatsWithSeedBonus {
    policy: Policy,
    stats: Vec<&'static str>,
}

impl StatsWithSeedBonus {
    /// Raw and rank columns.
    pub fn full() -> Self {
        let stats = RAW_STATS.iter().chain(RANK_STATS.iter()).copied().collect();
        Self {
            policy: Policy::FullStatsWithSeedBonus,
            stats,
        }
    }

    /// Raw columns only; anything rank-suffixed is ignored.
    pub fn raw() -> Self {
        Self {
            policy: Policy::RawStatsWithSeedBonus,
            stats: RAW_STATS.to_vec(),
        }
    }

    pub fn stats(&self) -> &[&'static str] {
        &self.stats
    }
}

impl Predictor for StatsWithSeedBonus {
    fn name(&self) -> &'static str {
        self.policy.name()
    }

    fn required_stats(&self) -> Vec<&'static str> {
        self.stats.clone()
    }

    fn pick<'a>(
        &self,
        a: &'a Competitor,
        b: &'a Competitor,
    ) -> Result<&'a Competitor, BracketError> {
        let mut points = stat_points(a, b, &self.stats, |stat, x, y| {
            if lower_is_better(stat) {
                x < y
            } else {
                x > y
            }
        })?;
        // Only one side can be a top-two seed in a well-formed bracket; if both are, A gets it.
        if a.seed < 3 {
            points.0 += 1;
        } else if b.seed < 3 {
            points.1 += 1;
        }
        Ok(by_points(a, b, points))
    }
}
