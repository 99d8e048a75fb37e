//! Errors from reading the field or writing results.

use crate::models::BracketError;

/// Errors raised by the tabular loader and the result writer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataError {
    /// Filesystem failure (message from the underlying `io::Error`).
    Io(String),
    /// Malformed CSV.
    Csv(String),
    /// Serialization failure.
    Json(String),
    /// A row lacks one of `Team`, `Region`, `Seed`.
    MissingField { line: u64, field: &'static str },
    /// `Seed` is not a positive integer.
    InvalidSeed { line: u64, value: String },
    /// A team's region is not one of the configured labels.
    UnknownRegion { team: String, region: String },
    /// The grouped field breaks a bracket invariant.
    Bracket(BracketError),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(msg) => write!(f, "I/O error: {}", msg),
            DataError::Csv(msg) => write!(f, "CSV error: {}", msg),
            DataError::Json(msg) => write!(f, "JSON error: {}", msg),
            DataError::MissingField { line, field } => {
                write!(f, "Line {}: missing required field '{}'", line, field)
            }
            DataError::InvalidSeed { line, value } => {
                write!(f, "Line {}: seed '{}' is not a positive integer", line, value)
            }
            DataError::UnknownRegion { team, region } => {
                write!(f, "Team '{}' is in unknown region '{}'", team, region)
            }
            DataError::Bracket(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Json(e.to_string())
    }
}

impl From<BracketError> for DataError {
    fn from(e: BracketError) -> Self {
        DataError::Bracket(e)
    }
}
