//! IPL 2025 Statistics Library
//!
//! Loads the season's batting, bowling, fielding and team tables from CSV
//! and answers read-only queries over them: top performers, team analysis,
//! player comparisons, a tournament summary, chart descriptions and a
//! plain-text report.
//!
//! ## Features
//!
//! - **Validated Loading**: Header, row and cross-table checks before any query runs
//! - **Rankings**: Stable descending rankings per category
//! - **Team and Player Lookups**: Case-insensitive team codes, exact player names
//! - **Charts**: Serializable dashboards with a plain-text renderer
//! - **Reports**: A deterministic text report of the whole season
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipl_stats::{Category, StatsAnalyzer, TableSources};
//! use std::path::Path;
//!
//! # fn example() -> ipl_stats::Result<()> {
//! let analyzer = StatsAnalyzer::load(&TableSources::in_dir(Path::new("data")))?;
//!
//! for record in analyzer.top_performers(Category::Batting, 5) {
//!     println!("{} ({})", record.player(), record.team());
//! }
//!
//! let summary = analyzer.summary();
//! println!("Table topper: {}", summary.points_leader.team);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at the directory holding the CSV files:
//! ```bash
//! export IPL_STATS_DATA_DIR=./data
//! ```

pub mod charts;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Category, Metric, TeamCode};
pub use error::{LoadProblem, Result, StatsError, TableKind};
pub use stats::{
    BattingRecord, BowlingRecord, ComparisonResult, FieldingRecord, RecordRef, StatsAnalyzer,
    TableSources, TeamRecord, TeamReport, TournamentSummary,
};

pub const DATA_DIR_ENV_VAR: &str = "IPL_STATS_DATA_DIR";
