//! Field validation and first-round slot order.

use crate::models::{BracketError, Competitor, Region, REGIONAL_ROUNDS};
use std::collections::HashSet;

/// The engine plays exactly this many regions.
pub const REGION_COUNT: usize = 4;

/// Largest region that resolves to one team within the regional rounds.
pub const MAX_TEAMS_PER_REGION: usize = 1 << REGIONAL_ROUNDS;

/// Check the region invariants and return the common region size.
///
/// Runs before any game is predicted so a bad field never yields a partial bracket.
pub fn validate_regions(regions: &[Region]) -> Result<usize, BracketError> {
    if regions.len() != REGION_COUNT {
        return Err(BracketError::RegionCountMismatch {
            expected: REGION_COUNT,
            found: regions.len(),
        });
    }

    let size = regions[0].len();
    let mut teams = HashSet::new();
    for region in regions {
        if region.len() != size || !size.is_power_of_two() {
            return Err(BracketError::UnevenField {
                region: region.label.clone(),
                size: region.len(),
                expected: size,
            });
        }
        if size > MAX_TEAMS_PER_REGION {
            return Err(BracketError::OversizedRegion {
                region: region.label.clone(),
                size,
                max: MAX_TEAMS_PER_REGION,
            });
        }
        validate_seeds(region)?;
        for c in &region.competitors {
            if !teams.insert(c.team.as_str()) {
                return Err(BracketError::DuplicateTeam(c.team.clone()));
            }
        }
    }
    Ok(size)
}

/// Seeds must be exactly 1..=len with no repeats, and every record must belong to the region.
fn validate_seeds(region: &Region) -> Result<(), BracketError> {
    let invalid = |reason: String| BracketError::InvalidSeeds {
        region: region.label.clone(),
        reason,
    };
    let mut seen = vec![false; region.len()];
    for c in &region.competitors {
        if c.region != region.label {
            return Err(invalid(format!("team '{}' is listed in region '{}'", c.team, c.region)));
        }
        let slot = (c.seed as usize)
            .checked_sub(1)
            .filter(|&i| i < seen.len())
            .ok_or_else(|| invalid(format!("seed {} of team '{}' is out of range", c.seed, c.team)))?;
        if std::mem::replace(&mut seen[slot], true) {
            return Err(invalid(format!("seed {} is used more than once", c.seed)));
        }
    }
    Ok(())
}

/// Every record must carry each stat the predictor will compare.
pub fn validate_stats<'a>(
    competitors: impl IntoIterator<Item = &'a Competitor>,
    required: &[&str],
) -> Result<(), BracketError> {
    for c in competitors {
        if let Some(stat) = required.iter().find(|s| c.stat(s).is_none()) {
            return Err(BracketError::MissingStat {
                team: c.team.clone(),
                stat: stat.to_string(),
            });
        }
    }
    Ok(())
}

/// Seeds in first-round slot order for a region of `size` teams.
///
/// Quarter anchors run serpentine (1, 4, 3, 2); each doubling pairs slot seed `s`
/// with `size + 1 - s`. For 16 teams: 1,16, 8,9, 4,13, 5,12, 3,14, 6,11, 2,15, 7,10.
pub fn slot_order(size: usize) -> Vec<u32> {
    match size {
        0 => Vec::new(),
        1 => vec![1],
        2 => vec![1, 2],
        4 => vec![1, 4, 3, 2],
        _ => {
            let partner = size as u32 + 1;
            slot_order(size / 2)
                .into_iter()
                .flat_map(|s| [s, partner - s])
                .collect()
        }
    }
}

/// First-round pairings as `(better seed, worse seed)`, in bracket order.
pub fn first_round_pairs(size: usize) -> Vec<(u32, u32)> {
    slot_order(size)
        .chunks_exact(2)
        .map(|p| (p[0].min(p[1]), p[0].max(p[1])))
        .collect()
}

/// Region competitors seated for the first round: adjacent entries meet, better seed first.
/// Caller has validated the seeds.
pub fn seat_region(region: &Region) -> Vec<Competitor> {
    let by_seed = region.sorted_by_seed();
    if by_seed.len() < 2 {
        return by_seed;
    }
    let seat = |seed: u32| by_seed[seed as usize - 1].clone();
    first_round_pairs(by_seed.len())
        .into_iter()
        .flat_map(|(a, b)| [seat(a), seat(b)])
        .collect()
}
