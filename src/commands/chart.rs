//! Chart command

use std::io::Write;

use crate::{
    charts::{
        batting_dashboard, bowling_dashboard, comparison_chart, league_dashboard, render_text,
        team_dashboard, Chart,
    },
    cli::{types::Category, ChartCmd},
    Result,
};

use super::{write_json, CommandContext};

/// Build the chart described by `cmd` from the matching query.
pub fn build_chart(ctx: &CommandContext, cmd: &ChartCmd) -> Result<Chart> {
    let analyzer = &ctx.analyzer;

    let chart = match cmd {
        ChartCmd::Batting { limit } => {
            batting_dashboard(&analyzer.top_performers(Category::Batting, *limit))
        }
        ChartCmd::Bowling { limit } => {
            bowling_dashboard(&analyzer.top_performers(Category::Bowling, *limit))
        }
        ChartCmd::League => league_dashboard(&analyzer.standings()),
        ChartCmd::Team { team } => team_dashboard(&analyzer.team_analysis(team.as_str())?),
        ChartCmd::Compare {
            first,
            second,
            category,
        } => comparison_chart(&analyzer.compare_players(first, second, *category)?),
    };
    Ok(chart)
}

/// Print a chart as text, or its description as JSON.
pub fn handle_chart(ctx: &CommandContext, cmd: &ChartCmd, out: &mut dyn Write) -> Result<()> {
    let chart = build_chart(ctx, cmd)?;

    if ctx.as_json {
        return write_json(out, &chart);
    }

    writeln!(out)?;
    write!(out, "{}", render_text(&chart))?;
    Ok(())
}
