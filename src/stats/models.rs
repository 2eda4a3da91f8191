//! Data models for the four loaded tables and the query results built on them

use crate::cli::types::{Category, Metric};
use serde::{Deserialize, Serialize};

/// Season batting figures for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingRecord {
    #[serde(rename(deserialize = "Player"), alias = "player")]
    pub player: String,
    #[serde(rename(deserialize = "Team"), alias = "team")]
    pub team: String,
    #[serde(rename(deserialize = "Matches"), alias = "matches")]
    pub matches: u32,
    #[serde(rename(deserialize = "Runs"), alias = "runs")]
    pub runs: u32,
    #[serde(rename(deserialize = "Average"), alias = "average")]
    pub average: f64,
    #[serde(rename(deserialize = "Strike_Rate"), alias = "strike_rate")]
    pub strike_rate: f64,
    #[serde(rename(deserialize = "Fours"), alias = "fours")]
    pub fours: u32,
    #[serde(rename(deserialize = "Sixes"), alias = "sixes")]
    pub sixes: u32,
    #[serde(rename(deserialize = "Highest_Score"), alias = "highest_score")]
    pub highest_score: u32,
}

/// Season bowling figures for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingRecord {
    #[serde(rename(deserialize = "Player"), alias = "player")]
    pub player: String,
    #[serde(rename(deserialize = "Team"), alias = "team")]
    pub team: String,
    #[serde(rename(deserialize = "Matches"), alias = "matches")]
    pub matches: u32,
    #[serde(rename(deserialize = "Wickets"), alias = "wickets")]
    pub wickets: u32,
    #[serde(rename(deserialize = "Economy"), alias = "economy")]
    pub economy: f64,
    #[serde(rename(deserialize = "Average"), alias = "average")]
    pub average: f64,
    #[serde(rename(deserialize = "Strike_Rate"), alias = "strike_rate")]
    pub strike_rate: f64,
    /// Best innings figures, e.g. `4/20`.
    #[serde(rename(deserialize = "Best_Figures"), alias = "best_figures")]
    pub best_figures: String,
}

/// Season fielding figures for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldingRecord {
    #[serde(rename(deserialize = "Player"), alias = "player")]
    pub player: String,
    #[serde(rename(deserialize = "Team"), alias = "team")]
    pub team: String,
    #[serde(rename(deserialize = "Matches"), alias = "matches")]
    pub matches: u32,
    #[serde(rename(deserialize = "Catches"), alias = "catches")]
    pub catches: u32,
    #[serde(rename(deserialize = "Run_Outs"), alias = "run_outs")]
    pub run_outs: u32,
    /// Conventionally catches + run outs.
    #[serde(rename(deserialize = "Dismissals"), alias = "dismissals")]
    pub dismissals: u32,
}

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename(deserialize = "Team"), alias = "team")]
    pub team: String,
    #[serde(rename(deserialize = "Position"), alias = "position")]
    pub position: u32,
    #[serde(rename(deserialize = "Matches"), alias = "matches")]
    pub matches: u32,
    #[serde(rename(deserialize = "Won"), alias = "won")]
    pub won: u32,
    #[serde(rename(deserialize = "Lost"), alias = "lost")]
    pub lost: u32,
    #[serde(rename(deserialize = "Points"), alias = "points")]
    pub points: u32,
    #[serde(rename(deserialize = "NRR"), alias = "net_run_rate")]
    pub net_run_rate: f64,
    #[serde(rename(deserialize = "Total_Runs"), alias = "total_runs")]
    pub total_runs: u32,
    #[serde(rename(deserialize = "Wickets"), alias = "wickets")]
    pub wickets: u32,
    #[serde(rename(deserialize = "Highest_Total"), alias = "highest_total")]
    pub highest_total: u32,
}

impl TeamRecord {
    /// Teams finishing in the top four reach the playoffs.
    pub fn is_playoff_team(&self) -> bool {
        self.position <= 4
    }
}

/// Common read access to the three player tables.
pub trait StatLine {
    fn player(&self) -> &str;
    fn team(&self) -> &str;

    /// Value of `metric`, or `None` when the table has no such column.
    fn metric(&self, metric: Metric) -> Option<f64>;
}

impl StatLine for BattingRecord {
    fn player(&self) -> &str {
        &self.player
    }

    fn team(&self) -> &str {
        &self.team
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Matches => Some(self.matches as f64),
            Metric::Runs => Some(self.runs as f64),
            Metric::Average => Some(self.average),
            Metric::StrikeRate => Some(self.strike_rate),
            Metric::Fours => Some(self.fours as f64),
            Metric::Sixes => Some(self.sixes as f64),
            Metric::HighestScore => Some(self.highest_score as f64),
            _ => None,
        }
    }
}

impl StatLine for BowlingRecord {
    fn player(&self) -> &str {
        &self.player
    }

    fn team(&self) -> &str {
        &self.team
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Matches => Some(self.matches as f64),
            Metric::Wickets => Some(self.wickets as f64),
            Metric::Economy => Some(self.economy),
            Metric::Average => Some(self.average),
            Metric::StrikeRate => Some(self.strike_rate),
            _ => None,
        }
    }
}

impl StatLine for FieldingRecord {
    fn player(&self) -> &str {
        &self.player
    }

    fn team(&self) -> &str {
        &self.team
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Matches => Some(self.matches as f64),
            Metric::Catches => Some(self.catches as f64),
            Metric::RunOuts => Some(self.run_outs as f64),
            Metric::Dismissals => Some(self.dismissals as f64),
            _ => None,
        }
    }
}

/// A borrowed row from any of the three player tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordRef<'a> {
    Batting(&'a BattingRecord),
    Bowling(&'a BowlingRecord),
    Fielding(&'a FieldingRecord),
}

impl<'a> RecordRef<'a> {
    pub fn category(&self) -> Category {
        match self {
            RecordRef::Batting(_) => Category::Batting,
            RecordRef::Bowling(_) => Category::Bowling,
            RecordRef::Fielding(_) => Category::Fielding,
        }
    }

    pub fn player(&self) -> &'a str {
        match self {
            RecordRef::Batting(r) => &r.player,
            RecordRef::Bowling(r) => &r.player,
            RecordRef::Fielding(r) => &r.player,
        }
    }

    pub fn team(&self) -> &'a str {
        match self {
            RecordRef::Batting(r) => &r.team,
            RecordRef::Bowling(r) => &r.team,
            RecordRef::Fielding(r) => &r.team,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match self {
            RecordRef::Batting(r) => r.metric(metric),
            RecordRef::Bowling(r) => r.metric(metric),
            RecordRef::Fielding(r) => r.metric(metric),
        }
    }
}

/// A team's standing plus its players from each category table.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport<'a> {
    pub standing: &'a TeamRecord,
    pub batting: Vec<&'a BattingRecord>,
    pub bowling: Vec<&'a BowlingRecord>,
    pub fielding: Vec<&'a FieldingRecord>,
}

/// Two players from the same category, side by side.
///
/// Presentation only: no winner is picked.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult<'a> {
    pub category: Category,
    pub first: RecordRef<'a>,
    pub second: RecordRef<'a>,
    pub metrics: Vec<Metric>,
}

impl ComparisonResult<'_> {
    /// `(metric, first value, second value)` for every compared metric.
    pub fn rows(&self) -> Vec<(Metric, f64, f64)> {
        self.metrics
            .iter()
            .filter_map(|&m| Some((m, self.first.metric(m)?, self.second.metric(m)?)))
            .collect()
    }
}

/// Tournament-wide aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentSummary<'a> {
    /// Most points; net run rate breaks ties.
    pub points_leader: &'a TeamRecord,
    /// Orange Cap: most runs.
    pub batting_leader: Option<&'a BattingRecord>,
    /// Purple Cap: most wickets.
    pub bowling_leader: Option<&'a BowlingRecord>,
    /// Most catches.
    pub best_fielder: Option<&'a FieldingRecord>,
    pub total_teams: usize,
    /// League matches, each counted once.
    pub total_matches: u64,
    pub total_points: u64,
    /// Top four in position order.
    pub playoff_teams: Vec<&'a TeamRecord>,
}
