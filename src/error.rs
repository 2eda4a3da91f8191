//! Error types for the IPL statistics analyzer

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

/// The four source tables, used to name the offending source in load errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Batting,
    Bowling,
    Fielding,
    Team,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableKind::Batting => "batting",
            TableKind::Bowling => "bowling",
            TableKind::Fielding => "fielding",
            TableKind::Team => "team",
        };
        write!(f, "{}", s)
    }
}

/// What went wrong while loading a single table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadProblem {
    #[error("unreadable source: {0}")]
    Unreadable(String),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("unexpected column '{0}'")]
    UnexpectedColumn(String),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("row {row}: column '{column}' must not be negative")]
    NegativeValue { row: usize, column: String },

    #[error("row {row}: column '{column}' must be a finite number")]
    NonFiniteValue { row: usize, column: String },

    #[error("duplicate player '{0}'")]
    DuplicatePlayer(String),

    #[error("player '{player}' references unknown team '{team}'")]
    UnknownTeamReference { player: String, team: String },

    #[error("positions must form a permutation of 1..={teams}")]
    InvalidPositions { teams: usize },

    #[error("table has no rows")]
    Empty,
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to load {table} table from {path}: {problem}")]
    Load {
        table: TableKind,
        path: String,
        problem: LoadProblem,
    },

    #[error("Invalid category: {category} (expected batting, bowling or fielding)")]
    InvalidCategory { category: String },

    #[error("Team not found: {team}")]
    UnknownTeam { team: String },

    #[error("Player not found: {}", .names.join(", "))]
    UnknownPlayer { names: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatsError {
    /// Build a load error for `table` read from `path`.
    pub fn load(table: TableKind, path: impl fmt::Display, problem: LoadProblem) -> Self {
        StatsError::Load {
            table,
            path: path.to_string(),
            problem,
        }
    }

    /// True for errors caused by caller input on an already-loaded analyzer.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StatsError::InvalidCategory { .. }
                | StatsError::UnknownTeam { .. }
                | StatsError::UnknownPlayer { .. }
        )
    }
}

#[cfg(test)]
mod tests;
