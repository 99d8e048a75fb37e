//! Resolved bracket: rounds of region groups of games, plus the champion.

use crate::models::competitor::{Competitor, CompetitorSummary};
use serde::{Deserialize, Serialize};

/// Number of rounds played inside a region before the Final Four.
pub const REGIONAL_ROUNDS: usize = 4;

/// Total rounds that contain games (regional rounds, Final Four, championship).
pub const TOTAL_ROUNDS: usize = REGIONAL_ROUNDS + 2;

/// Display name for a round index.
pub fn round_name(index: usize) -> &'static str {
    match index {
        0 => "First Round",
        1 => "Second Round",
        2 => "Sweet 16",
        3 => "Elite 8",
        4 => "Final Four",
        5 => "Championship",
        _ => "Champion",
    }
}

/// A single resolved game. `winner` is always a copy of `team_a` or `team_b`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub team_a: Competitor,
    pub team_b: Competitor,
    pub winner: Competitor,
}

impl Game {
    /// The side that did not advance.
    pub fn loser(&self) -> &Competitor {
        if self.winner == self.team_a {
            &self.team_b
        } else {
            &self.team_a
        }
    }
}

/// Games of one round that feed the same later slot (a region, a Final Four pair, the final).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionGroup {
    pub label: String,
    pub games: Vec<Game>,
    /// Who moves on from this group: game winners, or the lone entrant when no game was played.
    pub advancing: Vec<Competitor>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub index: usize,
    pub name: String,
    pub groups: Vec<RegionGroup>,
}

impl Round {
    pub fn game_count(&self) -> usize {
        self.groups.iter().map(|g| g.games.len()).sum()
    }

    /// All games in group order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.groups.iter().flat_map(|g| g.games.iter())
    }
}

/// A fully materialised bracket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Identifier of the policy that resolved every game.
    pub policy: String,
    pub teams_per_region: usize,
    pub rounds: Vec<Round>,
    pub champion: Competitor,
}

impl Bracket {
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// Games across every round; `N - 1` for an `N`-team field.
    pub fn game_count(&self) -> usize {
        self.rounds.iter().map(Round::game_count).sum()
    }

    /// Project every record down to `{Team, Region, Seed}`.
    pub fn summary(&self) -> BracketSummary {
        BracketSummary {
            policy: self.policy.clone(),
            teams_per_region: self.teams_per_region,
            rounds: self
                .rounds
                .iter()
                .map(|r| RoundSummary {
                    index: r.index,
                    name: r.name.clone(),
                    groups: r
                        .groups
                        .iter()
                        .map(|g| GroupSummary {
                            label: g.label.clone(),
                            games: g.games.iter().map(GameSummary::from_game).collect(),
                        })
                        .collect(),
                })
                .collect(),
            champion: self.champion.summary(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub teams: [CompetitorSummary; 2],
    pub winner: CompetitorSummary,
}

impl GameSummary {
    pub fn from_game(g: &Game) -> Self {
        Self {
            teams: [g.team_a.summary(), g.team_b.summary()],
            winner: g.winner.summary(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub label: String,
    pub games: Vec<GameSummary>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub index: usize,
    pub name: String,
    pub groups: Vec<GroupSummary>,
}

/// Projected bracket, as persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketSummary {
    pub policy: String,
    pub teams_per_region: usize,
    pub rounds: Vec<RoundSummary>,
    pub champion: CompetitorSummary,
}
