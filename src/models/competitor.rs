//! Competitor records and the regions they are seeded into.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single stat cell: numeric if the source value parsed as a number, text otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    /// Type a raw cell the way the tabular source does: finite numbers become `Number`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => StatValue::Number(n),
            _ => StatValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(_) => None,
        }
    }
}

/// One seeded team in the field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Region")]
    pub region: String,
    /// 1 is strongest within a region.
    #[serde(rename = "Seed")]
    pub seed: u32,
    /// Ranking/rating columns used only by the stat-based policies.
    #[serde(flatten)]
    pub stats: BTreeMap<String, StatValue>,
}

impl Competitor {
    /// Create a competitor with no stats.
    pub fn new(team: impl Into<String>, region: impl Into<String>, seed: u32) -> Self {
        Self {
            team: team.into(),
            region: region.into(),
            seed,
            stats: BTreeMap::new(),
        }
    }

    /// Builder-style helper for attaching a numeric stat.
    pub fn with_stat(mut self, name: impl Into<String>, value: f64) -> Self {
        self.stats.insert(name.into(), StatValue::Number(value));
        self
    }

    /// Numeric value of a stat, or `None` if absent or textual.
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats.get(name).and_then(StatValue::as_number)
    }

    /// Minimal projection kept in persisted output.
    pub fn summary(&self) -> CompetitorSummary {
        CompetitorSummary::from_competitor(self)
    }
}

/// `{Team, Region, Seed}` view of a competitor (for output files).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompetitorSummary {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Seed")]
    pub seed: u32,
}

impl CompetitorSummary {
    pub fn from_competitor(c: &Competitor) -> Self {
        Self {
            team: c.team.clone(),
            region: c.region.clone(),
            seed: c.seed,
        }
    }
}

/// One of the four sub-brackets: a label and its seeded competitors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub label: String,
    pub competitors: Vec<Competitor>,
}

impl Region {
    pub fn new(label: impl Into<String>, competitors: Vec<Competitor>) -> Self {
        Self {
            label: label.into(),
            competitors,
        }
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Competitors in ascending seed order. Stable, so input order survives for equal keys.
    pub fn sorted_by_seed(&self) -> Vec<Competitor> {
        let mut sorted = self.competitors.clone();
        sorted.sort_by_key(|c| c.seed);
        sorted
    }
}
