//! Player comparison command

use std::io::Write;

use crate::{cli::types::Category, stats::report::format_comparison, Result};

use super::{write_json, CommandContext};

/// Print two players of `category` side by side.
pub fn handle_compare(
    ctx: &CommandContext,
    first: &str,
    second: &str,
    category: Category,
    out: &mut dyn Write,
) -> Result<()> {
    let comparison = ctx.analyzer.compare_players(first, second, category)?;

    if ctx.as_json {
        return write_json(out, &comparison);
    }

    writeln!(out)?;
    write!(out, "{}", format_comparison(&comparison))?;
    Ok(())
}
