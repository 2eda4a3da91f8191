//! Plain-text rendering of query results and the full analysis report

use super::{models::*, schema::StatsAnalyzer};
use crate::cli::types::Category;
use std::fmt::Write;

/// Rows per category in the generated report.
pub const REPORT_TOP_N: usize = 5;

const RULE_WIDTH: usize = 50;

fn rule(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", rule('-', 20));
}

/// Awards, totals and the playoff line-up.
pub fn format_summary(summary: &TournamentSummary<'_>) -> String {
    let mut out = String::new();

    heading(&mut out, "TOURNAMENT SUMMARY");
    let _ = writeln!(out, "Total Teams: {}", summary.total_teams);
    let _ = writeln!(out, "Total Matches: {}", summary.total_matches);
    let _ = writeln!(out, "Total Points: {}", summary.total_points);
    let leader = summary.points_leader;
    let _ = writeln!(
        out,
        "Table Topper: {} - {} pts (NRR: {:+.3})",
        leader.team, leader.points, leader.net_run_rate
    );
    out.push('\n');

    heading(&mut out, "INDIVIDUAL AWARDS");
    match summary.batting_leader {
        Some(p) => {
            let _ = writeln!(out, "Orange Cap: {} ({}) - {} runs", p.player, p.team, p.runs);
        }
        None => {
            let _ = writeln!(out, "Orange Cap: n/a");
        }
    }
    match summary.bowling_leader {
        Some(p) => {
            let _ = writeln!(
                out,
                "Purple Cap: {} ({}) - {} wickets",
                p.player, p.team, p.wickets
            );
        }
        None => {
            let _ = writeln!(out, "Purple Cap: n/a");
        }
    }
    match summary.best_fielder {
        Some(p) => {
            let _ = writeln!(
                out,
                "Best Fielder: {} ({}) - {} catches",
                p.player, p.team, p.catches
            );
        }
        None => {
            let _ = writeln!(out, "Best Fielder: n/a");
        }
    }

    if !summary.playoff_teams.is_empty() {
        out.push('\n');
        heading(&mut out, "PLAYOFF TEAMS");
        for team in &summary.playoff_teams {
            let _ = writeln!(
                out,
                "{}. {} - {} pts (NRR: {:+.3})",
                team.position, team.team, team.points, team.net_run_rate
            );
        }
    }
    out
}

/// League table, one line per team in the given order.
pub fn format_standings(standings: &[&TeamRecord]) -> String {
    let mut out = String::new();
    for team in standings {
        let _ = writeln!(
            out,
            "{:2}. {:<4} - {:2} pts | W: {:2} L: {:2} | NRR: {:+.3}",
            team.position, team.team, team.points, team.won, team.lost, team.net_run_rate
        );
    }
    out
}

/// A player table with the category's listing columns.
pub fn format_top_performers(category: Category, rows: &[RecordRef<'_>]) -> String {
    let metrics = category.listing_metrics();
    let mut out = String::new();

    let _ = write!(out, "{:<22} {:<5}", "Player", "Team");
    for metric in metrics {
        let _ = write!(out, " {:>12}", metric.to_string());
    }
    out.push('\n');

    for record in rows {
        let _ = write!(out, "{:<22} {:<5}", record.player(), record.team());
        for metric in metrics {
            let value = record
                .metric(*metric)
                .map(|v| metric.format_value(v))
                .unwrap_or_default();
            let _ = write!(out, " {:>12}", value);
        }
        out.push('\n');
    }
    out
}

/// Standing line plus the team's players per category.
pub fn format_team_report(report: &TeamReport<'_>) -> String {
    let standing = report.standing;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} - position {} | {} pts | P: {} W: {} L: {} | NRR: {:+.3}",
        standing.team,
        standing.position,
        standing.points,
        standing.matches,
        standing.won,
        standing.lost,
        standing.net_run_rate
    );
    let _ = writeln!(
        out,
        "Total runs: {} | Wickets: {} | Highest total: {}",
        standing.total_runs, standing.wickets, standing.highest_total
    );

    let sections: [(Category, Vec<RecordRef<'_>>); 3] = [
        (
            Category::Batting,
            report.batting.iter().copied().map(RecordRef::Batting).collect(),
        ),
        (
            Category::Bowling,
            report.bowling.iter().copied().map(RecordRef::Bowling).collect(),
        ),
        (
            Category::Fielding,
            report.fielding.iter().copied().map(RecordRef::Fielding).collect(),
        ),
    ];

    for (category, rows) in sections {
        out.push('\n');
        heading(&mut out, &category.to_string().to_uppercase());
        if rows.is_empty() {
            let _ = writeln!(out, "(no {} entries)", category);
        } else {
            out.push_str(&format_top_performers(category, &rows));
        }
    }
    out
}

/// Metric-by-metric table of two players.
pub fn format_comparison(comparison: &ComparisonResult<'_>) -> String {
    let first = format!("{} ({})", comparison.first.player(), comparison.first.team());
    let second = format!("{} ({})", comparison.second.player(), comparison.second.team());
    let width = first.len().max(second.len()).max(10);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} comparison: {} vs {}",
        capitalize(&comparison.category.to_string()),
        comparison.first.player(),
        comparison.second.player()
    );
    let _ = writeln!(out, "{:<14} {:>w$} {:>w$}", "Metric", first, second, w = width);
    for (metric, a, b) in comparison.rows() {
        let _ = writeln!(
            out,
            "{:<14} {:>w$} {:>w$}",
            metric.to_string(),
            metric.format_value(a),
            metric.format_value(b),
            w = width
        );
    }
    out
}

/// First character upper-cased, e.g. `batting` to `Batting`.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_report_batters(rows: &[RecordRef<'_>]) -> String {
    let mut out = String::new();
    for record in rows {
        if let RecordRef::Batting(p) = record {
            let _ = writeln!(
                out,
                "{:<20} ({}) - {:3} runs @ {:.2} avg, SR: {:.2}",
                p.player, p.team, p.runs, p.average, p.strike_rate
            );
        }
    }
    out
}

fn format_report_bowlers(rows: &[RecordRef<'_>]) -> String {
    let mut out = String::new();
    for record in rows {
        if let RecordRef::Bowling(p) = record {
            let _ = writeln!(
                out,
                "{:<20} ({}) - {:2} wickets @ {:.2} avg, Econ: {:.2}",
                p.player, p.team, p.wickets, p.average, p.economy
            );
        }
    }
    out
}

fn format_report_fielders(rows: &[RecordRef<'_>]) -> String {
    let mut out = String::new();
    for record in rows {
        if let RecordRef::Fielding(p) = record {
            let _ = writeln!(
                out,
                "{:<20} ({}) - {:2} catches, {} run outs",
                p.player, p.team, p.catches, p.run_outs
            );
        }
    }
    out
}

impl StatsAnalyzer {
    /// The full text report. Performs no I/O.
    pub fn generate_report(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "IPL 2025 COMPREHENSIVE ANALYSIS REPORT");
        let _ = writeln!(out, "{}", rule('=', RULE_WIDTH));
        out.push('\n');

        out.push_str(&format_summary(&self.summary()));
        out.push('\n');

        heading(&mut out, "FINAL POINTS TABLE");
        out.push_str(&format_standings(&self.standings()));

        for category in Category::ALL {
            let rows = self.top_performers(category, REPORT_TOP_N);
            let title = match category {
                Category::Batting => "BATSMEN",
                Category::Bowling => "BOWLERS",
                Category::Fielding => "FIELDERS",
            };
            out.push('\n');
            heading(&mut out, &format!("TOP {} {}", REPORT_TOP_N, title));
            out.push_str(&match category {
                Category::Batting => format_report_batters(&rows),
                Category::Bowling => format_report_bowlers(&rows),
                Category::Fielding => format_report_fielders(&rows),
            });
        }
        out
    }
}
