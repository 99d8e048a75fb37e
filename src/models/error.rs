//! Errors raised while validating a field or resolving a bracket.

/// Errors that can occur while building a bracket or predicting a game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Policy identifier is not one of the recognised values.
    InvalidPolicy(String),
    /// A policy needs a numeric stat that the record does not carry.
    MissingStat { team: String, stat: String },
    /// A region's size is not a power of two, or regions differ in size.
    UnevenField { region: String, size: usize, expected: usize },
    /// The engine is wired for exactly four regions.
    RegionCountMismatch { expected: usize, found: usize },
    /// Regions larger than this do not fit the four regional rounds.
    OversizedRegion { region: String, size: usize, max: usize },
    /// Seeds within a region are not exactly 1..=size, or a record sits in the wrong region.
    InvalidSeeds { region: String, reason: String },
    /// The same team name appears more than once in the field.
    DuplicateTeam(String),
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InvalidPolicy(id) => write!(f, "Unknown prediction policy '{}'", id),
            BracketError::MissingStat { team, stat } => {
                write!(f, "Team '{}' has no numeric value for stat '{}'", team, stat)
            }
            BracketError::UnevenField {
                region,
                size,
                expected,
            } => write!(
                f,
                "Region '{}' has {} teams; expected {} (a power of two, equal across regions)",
                region, size, expected
            ),
            BracketError::RegionCountMismatch { expected, found } => {
                write!(f, "Expected exactly {} regions, got {}", expected, found)
            }
            BracketError::OversizedRegion { region, size, max } => write!(
                f,
                "Region '{}' has {} teams; at most {} per region are supported",
                region, size, max
            ),
            BracketError::InvalidSeeds { region, reason } => {
                write!(f, "Invalid seeding in region '{}': {}", region, reason)
            }
            BracketError::DuplicateTeam(team) => write!(f, "Team '{}' appears more than once", team),
        }
    }
}

impl std::error::Error for BracketError {}
