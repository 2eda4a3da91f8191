//! Shared command context.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    stats::{StatsAnalyzer, TableSources},
    Result,
};

use super::resolve_data_dir;

/// Resources every command needs: the loaded tables and output preferences.
#[derive(Debug)]
pub struct CommandContext {
    pub analyzer: StatsAnalyzer,
    pub data_dir: PathBuf,
    pub as_json: bool,
}

impl CommandContext {
    /// Resolve the data directory and load all four tables from it.
    pub fn load(data_dir: Option<PathBuf>, as_json: bool) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir);
        debug!(data_dir = %data_dir.display(), "loading tables");
        let analyzer = StatsAnalyzer::load(&TableSources::in_dir(&data_dir))?;

        Ok(Self {
            analyzer,
            data_dir,
            as_json,
        })
    }

    /// Wrap an analyzer that is already loaded.
    pub fn new(analyzer: StatsAnalyzer, data_dir: &Path, as_json: bool) -> Self {
        Self {
            analyzer,
            data_dir: data_dir.to_path_buf(),
            as_json,
        }
    }
}
