//! Command implementations for the IPL statistics CLI
//!
//! Handlers write to any `Write` sink so the subcommands and the
//! interactive menu share one code path.

pub mod chart;
pub mod common;
pub mod compare;
pub mod menu;
pub mod report;
pub mod summary;
pub mod team;
pub mod top_performers;

#[cfg(test)]
mod tests;

use crate::{DATA_DIR_ENV_VAR, Result};
use std::path::PathBuf;

pub use common::CommandContext;

/// Data directory from the flag, else `IPL_STATS_DATA_DIR`, else the working directory.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| {
            std::env::var(DATA_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Serialize `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: serde::Serialize + ?Sized>(
    out: &mut dyn std::io::Write,
    value: &T,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
