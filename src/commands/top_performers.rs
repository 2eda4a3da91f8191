//! Top performers command

use std::io::Write;

use crate::{cli::types::Category, stats::report::format_top_performers, Result};

use super::{write_json, CommandContext};

/// Default number of players listed.
pub const DEFAULT_TOP_N: usize = 10;

/// Print the `limit` best players of `category`.
pub fn handle_top_performers(
    ctx: &CommandContext,
    category: Category,
    limit: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let top = ctx.analyzer.top_performers(category, limit);

    if ctx.as_json {
        return write_json(out, &top);
    }

    writeln!(
        out,
        "\n🌟 TOP {} {} PERFORMERS",
        limit,
        category.to_string().to_uppercase()
    )?;
    writeln!(out, "{}", "-".repeat(50))?;
    write!(out, "{}", format_top_performers(category, &top))?;
    Ok(())
}
