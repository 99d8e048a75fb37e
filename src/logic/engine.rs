//! Bracket engine: seat the field, then resolve round after round until one team remains.
//!
//! Rounds 0-3 are played inside each region. Round 4 pairs region 0 with region 1 and
//! region 2 with region 3; round 5 is the final. Within every group, adjacent entrants meet,
//! so round r game g is the winner of round r-1 games 2g and 2g+1.

use crate::logic::predictor::{Policy, Predictor};
use crate::logic::seeding::{seat_region, validate_regions, validate_stats};
use crate::models::{
    round_name, Bracket, BracketError, Competitor, Game, Region, RegionGroup, Round,
    REGIONAL_ROUNDS, TOTAL_ROUNDS,
};

/// Entrants still alive in one slot of the bracket.
struct Field {
    label: String,
    entrants: Vec<Competitor>,
}

/// Build the full bracket with the policy's predictor.
pub fn build_bracket_with_policy(regions: &[Region], policy: Policy) -> Result<Bracket, BracketError> {
    build_bracket(regions, policy.predictor().as_ref())
}

/// Validate the field and resolve every game with `predictor`.
///
/// Either the whole bracket is returned or an error; nothing partial escapes.
pub fn build_bracket(regions: &[Region], predictor: &dyn Predictor) -> Result<Bracket, BracketError> {
    let teams_per_region = validate_regions(regions)
        .and_then(|size| {
            validate_stats(
                regions.iter().flat_map(|r| r.competitors.iter()),
                &predictor.required_stats(),
            )?;
            Ok(size)
        })
        .map_err(|e| {
            log::warn!("Rejected field: {}", e);
            e
        })?;

    let mut fields: Vec<Field> = regions
        .iter()
        .map(|r| Field {
            label: r.label.clone(),
            entrants: seat_region(r),
        })
        .collect();

    let mut rounds = Vec::with_capacity(TOTAL_ROUNDS);
    for index in 0..TOTAL_ROUNDS {
        if index >= REGIONAL_ROUNDS {
            fields = pair_up(fields);
        }
        let groups = fields
            .iter()
            .map(|f| play_group(f, predictor))
            .collect::<Result<Vec<_>, _>>()?;
        fields = groups
            .iter()
            .map(|g| Field {
                label: g.label.clone(),
                entrants: g.advancing.clone(),
            })
            .collect();
        rounds.push(Round {
            index,
            name: round_name(index).to_string(),
            groups,
        });
    }

    let champion = match fields.as_slice() {
        [last] if last.entrants.len() == 1 => last.entrants[0].clone(),
        _ => unreachable!("a validated field always resolves to a single champion"),
    };
    log::info!(
        "{} champion: {} ({} seed, {})",
        predictor.name(),
        champion.team,
        champion.seed,
        champion.region
    );

    Ok(Bracket {
        policy: predictor.name().to_string(),
        teams_per_region,
        rounds,
        champion,
    })
}

/// Merge neighbouring groups into one: (0, 1), (2, 3), ...
fn pair_up(fields: Vec<Field>) -> Vec<Field> {
    let merged: Vec<Field> = fields
        .chunks(2)
        .map(|pair| Field {
            label: pair
                .iter()
                .map(|f| f.label.as_str())
                .collect::<Vec<_>>()
                .join("/"),
            entrants: pair.iter().flat_map(|f| f.entrants.iter().cloned()).collect(),
        })
        .collect();
    match <[Field; 1]>::try_from(merged) {
        Ok([last]) => vec![Field {
            label: round_name(TOTAL_ROUNDS - 1).to_string(),
            entrants: last.entrants,
        }],
        Err(merged) => merged,
    }
}

/// Play adjacent entrants against each other. A lone entrant advances without a game.
fn play_group(field: &Field, predictor: &dyn Predictor) -> Result<RegionGroup, BracketError> {
    if field.entrants.len() < 2 {
        return Ok(RegionGroup {
            label: field.label.clone(),
            games: Vec::new(),
            advancing: field.entrants.clone(),
        });
    }

    let mut games = Vec::with_capacity(field.entrants.len() / 2);
    for pair in field.entrants.chunks_exact(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let winner = predictor.pick(a, b)?;
        log::debug!(
            "{}: ({}) {} vs ({}) {} -> {}",
            field.label,
            a.seed,
            a.team,
            b.seed,
            b.team,
            winner.team
        );
        games.push(Game {
            team_a: a.clone(),
            team_b: b.clone(),
            winner: winner.clone(),
        });
    }
    let advancing = games.iter().map(|g| g.winner.clone()).collect();
    Ok(RegionGroup {
        label: field.label.clone(),
        games,
        advancing,
    })
}
