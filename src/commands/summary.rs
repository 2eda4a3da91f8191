//! Summary and standings commands

use std::io::Write;

use crate::{
    stats::report::{format_standings, format_summary},
    Result,
};

use super::{write_json, CommandContext};

/// Print the tournament summary.
pub fn handle_summary(ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    let summary = ctx.analyzer.summary();

    if ctx.as_json {
        return write_json(out, &summary);
    }

    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "🏆 IPL 2025 TOURNAMENT SUMMARY")?;
    writeln!(out, "{}", "=".repeat(60))?;
    write!(out, "{}", format_summary(&summary))?;
    Ok(())
}

/// Print the full points table in position order.
pub fn handle_standings(ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    let standings = ctx.analyzer.standings();

    if ctx.as_json {
        return write_json(out, &standings);
    }

    writeln!(out, "\n📊 POINTS TABLE")?;
    writeln!(out, "{}", "-".repeat(50))?;
    write!(out, "{}", format_standings(&standings))?;
    Ok(())
}
