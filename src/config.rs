//! Run configuration, read from environment variables.
//!
//! `BRACKET_INPUT` (CSV path), `BRACKET_OUTPUT` (output directory),
//! `BRACKET_POLICY` (id 1-4 or policy name), `BRACKET_REGIONS` (comma-separated labels).

use crate::logic::Policy;
use crate::models::BracketError;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub policy: Policy,
    /// Region labels in bracket order; regions 0/1 and 2/3 meet in the Final Four.
    pub regions: Vec<String>,
}

fn default_input() -> PathBuf {
    PathBuf::from("resources/All_Schools.csv")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_policy() -> Policy {
    Policy::Seed
}

fn default_regions() -> Vec<String> {
    ["South", "West", "East", "Midwest"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            policy: default_policy(),
            regions: default_regions(),
        }
    }
}

impl RunConfig {
    /// Read from the process environment. A set but unrecognised policy is an error.
    pub fn from_env() -> Result<Self, BracketError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with a custom variable source (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BracketError> {
        let policy = match lookup("BRACKET_POLICY") {
            Some(raw) => raw.parse()?,
            None => default_policy(),
        };
        Ok(Self {
            input: lookup("BRACKET_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(default_input),
            output_dir: lookup("BRACKET_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(default_output_dir),
            policy,
            regions: lookup("BRACKET_REGIONS")
                .map(|raw| parse_regions(&raw))
                .unwrap_or_else(default_regions),
        })
    }

    /// Override the policy (e.g. from a command-line argument).
    pub fn with_policy_arg(mut self, arg: Option<&str>) -> Result<Self, BracketError> {
        if let Some(raw) = arg {
            self.policy = raw.parse()?;
        }
        Ok(self)
    }
}

fn parse_regions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
