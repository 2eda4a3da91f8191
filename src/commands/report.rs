//! Report generation command

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::{core::write_string, Result};

use super::CommandContext;

/// Write the full report to `path`, or to `out` when `to_stdout` is set.
pub fn handle_report(
    ctx: &CommandContext,
    path: &Path,
    to_stdout: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let report = ctx.analyzer.generate_report();

    if to_stdout {
        write!(out, "{}", report)?;
        return Ok(());
    }

    write_string(path, &report)?;
    info!(path = %path.display(), bytes = report.len(), "report written");
    writeln!(out, "📄 Report generated: {}", path.display())?;
    Ok(())
}
