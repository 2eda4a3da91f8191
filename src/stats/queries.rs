//! Read-only lookups over the loaded tables

use super::{models::*, schema::StatsAnalyzer};
use crate::cli::types::{Category, Metric, TeamCode};
use crate::error::{Result, StatsError};

/// Order `rows` by `metric`, highest first, keeping source order for ties.
pub fn rank_by<R: StatLine>(rows: &[R], metric: Metric, n: usize) -> Vec<&R> {
    let value = |r: &R| r.metric(metric).unwrap_or(f64::NEG_INFINITY);

    let mut ranked: Vec<&R> = rows.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| value(*b).total_cmp(&value(*a)));
    ranked.truncate(n);
    ranked
}

/// First row holding the maximum of `metric`.
pub fn leader_by<R: StatLine>(rows: &[R], metric: Metric) -> Option<&R> {
    rank_by(rows, metric, 1).into_iter().next()
}

impl StatsAnalyzer {
    /// The `n` best players of `category` by its primary metric.
    ///
    /// Returns fewer rows when the table is shorter, and nothing when `n` is 0.
    pub fn top_performers(&self, category: Category, n: usize) -> Vec<RecordRef<'_>> {
        let metric = category.primary_metric();
        match category {
            Category::Batting => rank_by(&self.batting, metric, n)
                .into_iter()
                .map(RecordRef::Batting)
                .collect(),
            Category::Bowling => rank_by(&self.bowling, metric, n)
                .into_iter()
                .map(RecordRef::Bowling)
                .collect(),
            Category::Fielding => rank_by(&self.fielding, metric, n)
                .into_iter()
                .map(RecordRef::Fielding)
                .collect(),
        }
    }

    /// Same as [`top_performers`](Self::top_performers) with the category given as text.
    pub fn top_performers_named(&self, category: &str, n: usize) -> Result<Vec<RecordRef<'_>>> {
        Ok(self.top_performers(category.parse()?, n))
    }

    /// Look up a team's standing row by code, ignoring ASCII case.
    pub fn find_team(&self, team_code: &str) -> Result<&TeamRecord> {
        let code = TeamCode::new(team_code.trim());
        self.teams
            .iter()
            .find(|t| code.matches(&t.team))
            .ok_or_else(|| StatsError::UnknownTeam {
                team: team_code.to_string(),
            })
    }

    /// A team's standing and its players from every category table.
    pub fn team_analysis(&self, team_code: &str) -> Result<TeamReport<'_>> {
        let standing = self.find_team(team_code)?;
        let code = standing.team.as_str();

        Ok(TeamReport {
            standing,
            batting: self.batting.iter().filter(|r| r.team == code).collect(),
            bowling: self.bowling.iter().filter(|r| r.team == code).collect(),
            fielding: self.fielding.iter().filter(|r| r.team == code).collect(),
        })
    }

    /// Look up a player by exact name in `category`'s table.
    pub fn find_player(&self, name: &str, category: Category) -> Option<RecordRef<'_>> {
        match category {
            Category::Batting => self
                .batting
                .iter()
                .find(|r| r.player == name)
                .map(RecordRef::Batting),
            Category::Bowling => self
                .bowling
                .iter()
                .find(|r| r.player == name)
                .map(RecordRef::Bowling),
            Category::Fielding => self
                .fielding
                .iter()
                .find(|r| r.player == name)
                .map(RecordRef::Fielding),
        }
    }

    /// Put two players of the same category side by side.
    ///
    /// Both names are looked up before failing, so a single
    /// [`StatsError::UnknownPlayer`] reports every missing name.
    pub fn compare_players(
        &self,
        first: &str,
        second: &str,
        category: Category,
    ) -> Result<ComparisonResult<'_>> {
        let first_record = self.find_player(first, category);
        let second_record = self.find_player(second, category);

        match (first_record, second_record) {
            (Some(first), Some(second)) => Ok(ComparisonResult {
                category,
                first,
                second,
                metrics: category.comparison_metrics().to_vec(),
            }),
            (first_record, second_record) => {
                let mut names = Vec::new();
                if first_record.is_none() {
                    names.push(first.to_string());
                }
                if second_record.is_none() && (first_record.is_some() || second != first) {
                    names.push(second.to_string());
                }
                Err(StatsError::UnknownPlayer { names })
            }
        }
    }
}
