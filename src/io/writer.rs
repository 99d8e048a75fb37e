//! Result writer: one JSON file per round per group, plus the full bracket and a run manifest.

use crate::io::error::DataError;
use crate::models::{Bracket, CompetitorSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metadata about a run, written next to the round files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub policy: String,
    pub teams_per_region: usize,
    pub games: usize,
    pub champion: CompetitorSummary,
    pub generated_at: DateTime<Utc>,
}

impl RunManifest {
    pub fn for_bracket(bracket: &Bracket) -> Self {
        Self {
            policy: bracket.policy.clone(),
            teams_per_region: bracket.teams_per_region,
            games: bracket.game_count(),
            champion: bracket.champion.summary(),
            generated_at: Utc::now(),
        }
    }
}

/// File name for round `round` (0-based) and group `group` (0-based).
pub fn round_file_name(round: usize, group: usize) -> String {
    format!("Round{}-Region{}.json", round + 1, group + 1)
}

/// Write the bracket under `dir`, creating it if needed. Returns every path written.
///
/// Round files hold the games of one group as `[[teamA, teamB], ...]`; the file after the
/// last round holds `[champion]`.
pub fn write_bracket(dir: impl AsRef<Path>, bracket: &Bracket) -> Result<Vec<PathBuf>, DataError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for round in &bracket.rounds {
        for (g, group) in round.groups.iter().enumerate() {
            let games: Vec<[CompetitorSummary; 2]> = group
                .games
                .iter()
                .map(|game| [game.team_a.summary(), game.team_b.summary()])
                .collect();
            written.push(write_json(dir, &round_file_name(round.index, g), &games)?);
        }
    }
    let champion = [bracket.champion.summary()];
    written.push(write_json(dir, &round_file_name(bracket.rounds.len(), 0), &champion)?);
    written.push(write_json(dir, "bracket.json", &bracket.summary())?);
    written.push(write_json(dir, "manifest.json", &RunManifest::for_bracket(bracket))?);

    log::info!("Wrote {} files to {}", written.len(), dir.display());
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<PathBuf, DataError> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, json)?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}
