//! Chart builders over query results
//!
//! Builders only reshape what the queries return; ranking and filtering
//! happen in `stats::queries`.

use super::model::{Chart, Panel, ScatterPoint, Series, Slice};
use crate::cli::types::Metric;
use crate::stats::report::capitalize;
use crate::stats::{ComparisonResult, RecordRef, TeamRecord, TeamReport};

fn players(rows: &[RecordRef<'_>]) -> Vec<String> {
    rows.iter().map(|r| r.player().to_string()).collect()
}

fn values(rows: &[RecordRef<'_>], metric: Metric) -> Vec<f64> {
    rows.iter()
        .map(|r| r.metric(metric).unwrap_or_default())
        .collect()
}

/// How many rows each team contributes, most first; ties keep first appearance.
pub fn team_distribution(teams: impl IntoIterator<Item = String>) -> Vec<Slice> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for team in teams {
        match counts.iter_mut().find(|(t, _)| *t == team) {
            Some((_, n)) => *n += 1,
            None => counts.push((team, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(label, n)| Slice {
            label,
            value: n as f64,
        })
        .collect()
}

fn team_pie(title: &str, rows: &[RecordRef<'_>]) -> Panel {
    Panel::pie(
        title,
        team_distribution(rows.iter().map(|r| r.team().to_string())),
    )
}

/// Four panels over the top batters: runs, average vs strike rate, boundaries, teams.
pub fn batting_dashboard(top: &[RecordRef<'_>]) -> Chart {
    let names = players(top);

    let points = top
        .iter()
        .map(|r| ScatterPoint {
            label: r.player().to_string(),
            x: r.metric(Metric::Average).unwrap_or_default(),
            y: r.metric(Metric::StrikeRate).unwrap_or_default(),
            size: r.metric(Metric::Runs).map(|runs| runs / 10.0),
        })
        .collect();

    Chart {
        title: "IPL 2025 - Top Batsmen Analysis".to_string(),
        panels: vec![
            Panel::bar(
                "Total Runs",
                "Players",
                "Runs",
                names.clone(),
                values(top, Metric::Runs),
            ),
            Panel::scatter("Strike Rate vs Average", "Average", "Strike Rate", points),
            Panel::grouped_bar(
                "Boundaries Hit",
                "Players",
                "Count",
                names,
                vec![
                    Series {
                        name: "Fours".to_string(),
                        values: values(top, Metric::Fours),
                    },
                    Series {
                        name: "Sixes".to_string(),
                        values: values(top, Metric::Sixes),
                    },
                ],
            ),
            team_pie("Team Distribution (Top Batsmen)", top),
        ],
    }
}

/// Four panels over the top bowlers: wickets, economy vs wickets, average, teams.
pub fn bowling_dashboard(top: &[RecordRef<'_>]) -> Chart {
    let names = players(top);

    let points = top
        .iter()
        .map(|r| ScatterPoint {
            label: r.player().to_string(),
            x: r.metric(Metric::Economy).unwrap_or_default(),
            y: r.metric(Metric::Wickets).unwrap_or_default(),
            size: None,
        })
        .collect();

    Chart {
        title: "IPL 2025 - Bowling Analysis".to_string(),
        panels: vec![
            Panel::bar(
                "Total Wickets",
                "Bowlers",
                "Wickets",
                names.clone(),
                values(top, Metric::Wickets),
            ),
            Panel::scatter("Economy Rate vs Wickets", "Economy Rate", "Wickets", points),
            Panel::bar(
                "Bowling Average",
                "Bowlers",
                "Average",
                names,
                values(top, Metric::Average),
            )
            .horizontal(),
            team_pie("Team Distribution (Top Bowlers)", top),
        ],
    }
}

/// League-wide panels over the standings.
pub fn league_dashboard(standings: &[&TeamRecord]) -> Chart {
    let teams: Vec<String> = standings.iter().map(|t| t.team.clone()).collect();
    let column =
        |f: fn(&TeamRecord) -> f64| -> Vec<f64> { standings.iter().map(|&t| f(t)).collect() };

    let playoff = standings.iter().filter(|t| t.is_playoff_team()).count();

    Chart {
        title: "IPL 2025 - Team Performance Analysis".to_string(),
        panels: vec![
            Panel::bar(
                "Points Table",
                "Teams",
                "Points",
                teams.clone(),
                column(|t| t.points as f64),
            ),
            Panel::bar(
                "Net Run Rate",
                "Teams",
                "NRR",
                teams.clone(),
                column(|t| t.net_run_rate),
            ),
            Panel::bar(
                "Total Runs Scored",
                "Teams",
                "Runs",
                teams.clone(),
                column(|t| t.total_runs as f64),
            ),
            Panel::grouped_bar(
                "Wins vs Losses",
                "Teams",
                "Matches",
                teams.clone(),
                vec![
                    Series {
                        name: "Won".to_string(),
                        values: column(|t| t.won as f64),
                    },
                    Series {
                        name: "Lost".to_string(),
                        values: column(|t| t.lost as f64),
                    },
                ],
            ),
            Panel::bar(
                "Highest Team Total",
                "Teams",
                "Runs",
                teams,
                column(|t| t.highest_total as f64),
            ),
            Panel::pie(
                "Playoff Qualification",
                vec![
                    Slice {
                        label: "Playoff Teams".to_string(),
                        value: playoff as f64,
                    },
                    Slice {
                        label: "Non-Playoff Teams".to_string(),
                        value: (standings.len() - playoff) as f64,
                    },
                ],
            ),
        ],
    }
}

/// One team's players across the three categories.
pub fn team_dashboard(report: &TeamReport<'_>) -> Chart {
    let batting: Vec<RecordRef<'_>> = report
        .batting
        .iter()
        .copied()
        .map(RecordRef::Batting)
        .collect();
    let bowling: Vec<RecordRef<'_>> = report
        .bowling
        .iter()
        .copied()
        .map(RecordRef::Bowling)
        .collect();
    let fielding: Vec<RecordRef<'_>> = report
        .fielding
        .iter()
        .copied()
        .map(RecordRef::Fielding)
        .collect();

    Chart {
        title: format!("IPL 2025 - {} Squad Analysis", report.standing.team),
        panels: vec![
            Panel::bar(
                "Runs",
                "Batters",
                "Runs",
                players(&batting),
                values(&batting, Metric::Runs),
            ),
            Panel::bar(
                "Wickets",
                "Bowlers",
                "Wickets",
                players(&bowling),
                values(&bowling, Metric::Wickets),
            ),
            Panel::bar(
                "Catches",
                "Fielders",
                "Catches",
                players(&fielding),
                values(&fielding, Metric::Catches),
            ),
        ],
    }
}

/// Side-by-side bars for every compared metric.
pub fn comparison_chart(comparison: &ComparisonResult<'_>) -> Chart {
    let rows = comparison.rows();
    let label = |r: &RecordRef<'_>| format!("{} ({})", r.player(), r.team());

    Chart {
        title: format!(
            "{} Comparison: {} vs {}",
            capitalize(&comparison.category.to_string()),
            comparison.first.player(),
            comparison.second.player()
        ),
        panels: vec![Panel::grouped_bar(
            "Metrics",
            "Metrics",
            "Values",
            rows.iter().map(|(m, _, _)| m.to_string()).collect(),
            vec![
                Series {
                    name: label(&comparison.first),
                    values: rows.iter().map(|(_, a, _)| *a).collect(),
                },
                Series {
                    name: label(&comparison.second),
                    values: rows.iter().map(|(_, _, b)| *b).collect(),
                },
            ],
        )],
    }
}
