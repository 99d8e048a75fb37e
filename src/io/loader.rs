//! Tabular loader: CSV rows into competitor records, then into regions.

use crate::io::error::DataError;
use crate::logic::REGION_COUNT;
use crate::models::{BracketError, Competitor, Region, StatValue};
use std::collections::BTreeMap;
use std::path::Path;

/// Read competitors from a CSV file on disk.
pub fn load_competitors_from_path(path: impl AsRef<Path>) -> Result<Vec<Competitor>, DataError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let competitors = load_competitors(file)?;
    log::info!("Loaded {} teams from {}", competitors.len(), path.display());
    Ok(competitors)
}

/// Read competitors from CSV with a header row.
///
/// Cells are numeric when they parse as a finite number, text otherwise. Empty cells are
/// treated as absent. `Team`, `Region` and `Seed` are required on every row.
pub fn load_competitors<R: std::io::Read>(reader: R) -> Result<Vec<Competitor>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut competitors = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let mut team = None;
        let mut region = None;
        let mut seed = None;
        let mut stats = BTreeMap::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            if value.is_empty() {
                continue;
            }
            match header {
                "Team" => team = Some(value.to_string()),
                "Region" => region = Some(value.to_string()),
                "Seed" => seed = Some(parse_seed(value, line)?),
                _ => {
                    stats.insert(header.to_string(), StatValue::parse(value));
                }
            }
        }

        competitors.push(Competitor {
            team: team.ok_or(DataError::MissingField { line, field: "Team" })?,
            region: region.ok_or(DataError::MissingField { line, field: "Region" })?,
            seed: seed.ok_or(DataError::MissingField { line, field: "Seed" })?,
            stats,
        });
    }
    Ok(competitors)
}

/// Seeds may arrive as `3` or `3.0`; anything else is rejected.
fn parse_seed(value: &str, line: u64) -> Result<u32, DataError> {
    let invalid = || DataError::InvalidSeed {
        line,
        value: value.to_string(),
    };
    let n: f64 = value.parse().map_err(|_| invalid())?;
    if !n.is_finite() || n < 1.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
        return Err(invalid());
    }
    Ok(n as u32)
}

/// Partition competitors into regions in `labels` order, each sorted by seed.
pub fn group_regions(
    competitors: Vec<Competitor>,
    labels: &[String],
) -> Result<Vec<Region>, DataError> {
    if labels.len() != REGION_COUNT {
        return Err(BracketError::RegionCountMismatch {
            expected: REGION_COUNT,
            found: labels.len(),
        }
        .into());
    }
    let mut regions: Vec<Region> = labels.iter().map(|l| Region::new(l.clone(), Vec::new())).collect();
    for c in competitors {
        let region = regions
            .iter_mut()
            .find(|r| r.label == c.region)
            .ok_or_else(|| DataError::UnknownRegion {
                team: c.team.clone(),
                region: c.region.clone(),
            })?;
        region.competitors.push(c);
    }
    for region in &mut regions {
        region.competitors.sort_by_key(|c| c.seed);
    }
    Ok(regions)
}
