//! Team analysis command

use std::io::Write;

use crate::{cli::types::TeamCode, stats::report::format_team_report, Result};

use super::{write_json, CommandContext};

/// Print a team's standing and its players per category.
pub fn handle_team(ctx: &CommandContext, team: &TeamCode, out: &mut dyn Write) -> Result<()> {
    let report = ctx.analyzer.team_analysis(team.as_str())?;

    if ctx.as_json {
        return write_json(out, &report);
    }

    writeln!(out, "\n🏏 TEAM ANALYSIS: {}", report.standing.team)?;
    writeln!(out, "{}", "-".repeat(50))?;
    write!(out, "{}", format_team_report(&report))?;
    Ok(())
}
