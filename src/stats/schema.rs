//! Table sources, column schemas and loading

use super::models::{BattingRecord, BowlingRecord, FieldingRecord, StatLine, TeamRecord};
use crate::cli::types::Metric;
use crate::error::{LoadProblem, Result, StatsError, TableKind};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const BATTING_FILE: &str = "ipl_2025_batting_stats.csv";
pub const BOWLING_FILE: &str = "ipl_2025_bowling_stats.csv";
pub const FIELDING_FILE: &str = "ipl_2025_fielding_stats.csv";
pub const TEAM_FILE: &str = "ipl_2025_team_stats.csv";

/// A column accepted under its schema name or its published header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub header: &'static str,
}

const fn col(field: &'static str, header: &'static str) -> Column {
    Column { field, header }
}

pub const BATTING_COLUMNS: &[Column] = &[
    col("player", "Player"),
    col("team", "Team"),
    col("matches", "Matches"),
    col("runs", "Runs"),
    col("average", "Average"),
    col("strike_rate", "Strike_Rate"),
    col("fours", "Fours"),
    col("sixes", "Sixes"),
    col("highest_score", "Highest_Score"),
];

pub const BOWLING_COLUMNS: &[Column] = &[
    col("player", "Player"),
    col("team", "Team"),
    col("matches", "Matches"),
    col("wickets", "Wickets"),
    col("economy", "Economy"),
    col("average", "Average"),
    col("strike_rate", "Strike_Rate"),
    col("best_figures", "Best_Figures"),
];

pub const FIELDING_COLUMNS: &[Column] = &[
    col("player", "Player"),
    col("team", "Team"),
    col("matches", "Matches"),
    col("catches", "Catches"),
    col("run_outs", "Run_Outs"),
    col("dismissals", "Dismissals"),
];

pub const TEAM_COLUMNS: &[Column] = &[
    col("team", "Team"),
    col("position", "Position"),
    col("matches", "Matches"),
    col("won", "Won"),
    col("lost", "Lost"),
    col("points", "Points"),
    col("net_run_rate", "NRR"),
    col("total_runs", "Total_Runs"),
    col("wickets", "Wickets"),
    col("highest_total", "Highest_Total"),
];

/// Columns expected for `kind`.
pub fn columns_for(kind: TableKind) -> &'static [Column] {
    match kind {
        TableKind::Batting => BATTING_COLUMNS,
        TableKind::Bowling => BOWLING_COLUMNS,
        TableKind::Fielding => FIELDING_COLUMNS,
        TableKind::Team => TEAM_COLUMNS,
    }
}

/// Locations of the four CSV sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSources {
    pub batting: PathBuf,
    pub bowling: PathBuf,
    pub fielding: PathBuf,
    pub team: PathBuf,
}

impl TableSources {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            batting: dir.join(BATTING_FILE),
            bowling: dir.join(BOWLING_FILE),
            fielding: dir.join(FIELDING_FILE),
            team: dir.join(TEAM_FILE),
        }
    }

    pub fn path(&self, kind: TableKind) -> &Path {
        match kind {
            TableKind::Batting => &self.batting,
            TableKind::Bowling => &self.bowling,
            TableKind::Fielding => &self.fielding,
            TableKind::Team => &self.team,
        }
    }
}

/// The four tables, loaded once and never modified.
#[derive(Debug, Clone)]
pub struct StatsAnalyzer {
    pub(crate) batting: Vec<BattingRecord>,
    pub(crate) bowling: Vec<BowlingRecord>,
    pub(crate) fielding: Vec<FieldingRecord>,
    pub(crate) teams: Vec<TeamRecord>,
}

impl StatsAnalyzer {
    /// Load and validate all four tables.
    ///
    /// Fails on the first source that is unreadable, has a missing or
    /// unexpected column, contains a malformed row, or breaks a table
    /// invariant. Nothing is kept on failure.
    pub fn load(sources: &TableSources) -> Result<Self> {
        let batting = read_table(TableKind::Batting, &sources.batting)?;
        let bowling = read_table(TableKind::Bowling, &sources.bowling)?;
        let fielding = read_table(TableKind::Fielding, &sources.fielding)?;
        let teams = read_table(TableKind::Team, &sources.team)?;

        let analyzer = Self::assemble(batting, bowling, fielding, teams, |kind| {
            sources.path(kind).display().to_string()
        })?;
        info!(
            batting = analyzer.batting.len(),
            bowling = analyzer.bowling.len(),
            fielding = analyzer.fielding.len(),
            teams = analyzer.teams.len(),
            "analyzer ready"
        );
        Ok(analyzer)
    }

    /// Build an analyzer from rows already in memory, with the same checks as [`load`](Self::load).
    pub fn from_tables(
        batting: Vec<BattingRecord>,
        bowling: Vec<BowlingRecord>,
        fielding: Vec<FieldingRecord>,
        teams: Vec<TeamRecord>,
    ) -> Result<Self> {
        let fail =
            |kind: TableKind| move |p: LoadProblem| StatsError::load(kind, "<memory>", p);
        check_rows(&batting).map_err(fail(TableKind::Batting))?;
        check_rows(&bowling).map_err(fail(TableKind::Bowling))?;
        check_rows(&fielding).map_err(fail(TableKind::Fielding))?;
        check_rows(&teams).map_err(fail(TableKind::Team))?;
        Self::assemble(batting, bowling, fielding, teams, |_| "<memory>".to_string())
    }

    fn assemble(
        batting: Vec<BattingRecord>,
        bowling: Vec<BowlingRecord>,
        fielding: Vec<FieldingRecord>,
        teams: Vec<TeamRecord>,
        origin: impl Fn(TableKind) -> String,
    ) -> Result<Self> {
        check_teams(&teams)
            .map_err(|p| StatsError::load(TableKind::Team, origin(TableKind::Team), p))?;

        let codes: HashSet<&str> = teams.iter().map(|t| t.team.as_str()).collect();
        check_players(&batting, &codes)
            .map_err(|p| StatsError::load(TableKind::Batting, origin(TableKind::Batting), p))?;
        check_players(&bowling, &codes)
            .map_err(|p| StatsError::load(TableKind::Bowling, origin(TableKind::Bowling), p))?;
        check_players(&fielding, &codes)
            .map_err(|p| StatsError::load(TableKind::Fielding, origin(TableKind::Fielding), p))?;

        Ok(Self {
            batting,
            bowling,
            fielding,
            teams,
        })
    }

    pub fn batting(&self) -> &[BattingRecord] {
        &self.batting
    }

    pub fn bowling(&self) -> &[BowlingRecord] {
        &self.bowling
    }

    pub fn fielding(&self) -> &[FieldingRecord] {
        &self.fielding
    }

    /// Team rows in source order.
    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }
}

/// Row-level checks that serde cannot express.
trait CheckedRow {
    fn check(&self, row: usize) -> std::result::Result<(), LoadProblem>;
}

impl CheckedRow for BattingRecord {
    fn check(&self, row: usize) -> std::result::Result<(), LoadProblem> {
        check_batting(self, row)
    }
}

impl CheckedRow for BowlingRecord {
    fn check(&self, row: usize) -> std::result::Result<(), LoadProblem> {
        check_bowling(self, row)
    }
}

impl CheckedRow for FieldingRecord {
    fn check(&self, _row: usize) -> std::result::Result<(), LoadProblem> {
        Ok(())
    }
}

impl CheckedRow for TeamRecord {
    // net_run_rate may be negative but must still be a real number.
    fn check(&self, row: usize) -> std::result::Result<(), LoadProblem> {
        finite(self.net_run_rate, "net_run_rate", row)
    }
}

fn check_rows<R: CheckedRow>(rows: &[R]) -> std::result::Result<(), LoadProblem> {
    for (index, record) in rows.iter().enumerate() {
        record.check(index + 1)?;
    }
    Ok(())
}

fn finite(value: f64, column: &str, row: usize) -> std::result::Result<(), LoadProblem> {
    if !value.is_finite() {
        return Err(LoadProblem::NonFiniteValue {
            row,
            column: column.to_string(),
        });
    }
    Ok(())
}

fn non_negative(value: f64, metric: Metric, row: usize) -> std::result::Result<(), LoadProblem> {
    finite(value, metric.column(), row)?;
    if value < 0.0 {
        return Err(LoadProblem::NegativeValue {
            row,
            column: metric.column().to_string(),
        });
    }
    Ok(())
}

fn check_batting(record: &BattingRecord, row: usize) -> std::result::Result<(), LoadProblem> {
    non_negative(record.average, Metric::Average, row)?;
    non_negative(record.strike_rate, Metric::StrikeRate, row)
}

fn check_bowling(record: &BowlingRecord, row: usize) -> std::result::Result<(), LoadProblem> {
    non_negative(record.economy, Metric::Economy, row)?;
    non_negative(record.average, Metric::Average, row)?;
    non_negative(record.strike_rate, Metric::StrikeRate, row)
}

/// Compare a header row against the expected columns.
///
/// Every column must appear exactly once, under either of its names.
pub fn check_headers(
    columns: &[Column],
    headers: &StringRecord,
) -> std::result::Result<(), LoadProblem> {
    for column in columns {
        let present = headers
            .iter()
            .any(|h| h == column.header || h == column.field);
        if !present {
            return Err(LoadProblem::MissingColumn(column.header.to_string()));
        }
    }

    let mut seen: HashSet<&'static str> = HashSet::new();
    for header in headers.iter() {
        match columns
            .iter()
            .find(|c| header == c.header || header == c.field)
        {
            Some(column) if seen.insert(column.field) => {}
            _ => return Err(LoadProblem::UnexpectedColumn(header.to_string())),
        }
    }
    Ok(())
}

fn check_teams(teams: &[TeamRecord]) -> std::result::Result<(), LoadProblem> {
    if teams.is_empty() {
        return Err(LoadProblem::Empty);
    }

    let mut positions: Vec<u32> = teams.iter().map(|t| t.position).collect();
    positions.sort_unstable();
    let is_permutation = positions
        .iter()
        .enumerate()
        .all(|(i, &p)| p as usize == i + 1);
    if !is_permutation {
        return Err(LoadProblem::InvalidPositions { teams: teams.len() });
    }
    Ok(())
}

fn check_players<R: StatLine>(
    rows: &[R],
    teams: &HashSet<&str>,
) -> std::result::Result<(), LoadProblem> {
    let mut names: HashSet<&str> = HashSet::new();
    for record in rows {
        if !names.insert(record.player()) {
            return Err(LoadProblem::DuplicatePlayer(record.player().to_string()));
        }
        if !teams.contains(record.team()) {
            return Err(LoadProblem::UnknownTeamReference {
                player: record.player().to_string(),
                team: record.team().to_string(),
            });
        }
    }
    Ok(())
}

fn read_table<R>(kind: TableKind, path: &Path) -> Result<Vec<R>>
where
    R: DeserializeOwned + CheckedRow,
{
    let fail = |problem: LoadProblem| StatsError::load(kind, path.display(), problem);

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| fail(LoadProblem::Unreadable(e.to_string())))?;

    let headers = reader
        .headers()
        .map_err(|e| fail(LoadProblem::Unreadable(e.to_string())))?
        .clone();
    check_headers(columns_for(kind), &headers).map_err(fail)?;

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<R>().enumerate() {
        let row = index + 1;
        let record = result.map_err(|e| {
            fail(LoadProblem::InvalidRow {
                row,
                message: e.to_string(),
            })
        })?;
        record.check(row).map_err(fail)?;
        rows.push(record);
    }

    debug!(table = %kind, path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}
