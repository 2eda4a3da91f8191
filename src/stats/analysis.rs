//! Tournament-wide aggregates

use super::{
    models::*,
    queries::leader_by,
    schema::StatsAnalyzer,
};
use crate::cli::types::Metric;
use std::cmp::Ordering;

/// Points first, then net run rate, then the better (lower) league position.
fn standing_order(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    a.points
        .cmp(&b.points)
        .then_with(|| a.net_run_rate.total_cmp(&b.net_run_rate))
        .then_with(|| b.position.cmp(&a.position))
}

impl StatsAnalyzer {
    /// Team rows ordered by league position.
    pub fn standings(&self) -> Vec<&TeamRecord> {
        let mut table: Vec<&TeamRecord> = self.teams.iter().collect();
        table.sort_by_key(|t| t.position);
        table
    }

    /// Team with the most points, net run rate breaking ties.
    pub fn points_leader(&self) -> &TeamRecord {
        // construction rejects an empty team table, so the fallback never runs
        self.teams
            .iter()
            .max_by(|a, b| standing_order(a, b))
            .unwrap_or_else(|| &self.teams[0])
    }

    /// Derive the tournament summary. Pure: repeated calls give equal results.
    pub fn summary(&self) -> TournamentSummary<'_> {
        let team_matches: u64 = self.teams.iter().map(|t| u64::from(t.matches)).sum();

        TournamentSummary {
            points_leader: self.points_leader(),
            batting_leader: leader_by(&self.batting, Metric::Runs),
            bowling_leader: leader_by(&self.bowling, Metric::Wickets),
            best_fielder: leader_by(&self.fielding, Metric::Catches),
            total_teams: self.teams.len(),
            total_matches: team_matches / 2,
            total_points: self.teams.iter().map(|t| u64::from(t.points)).sum(),
            playoff_teams: self
                .standings()
                .into_iter()
                .filter(|t| t.is_playoff_team())
                .collect(),
        }
    }
}
