//! File system helpers

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Default file name for the generated report.
pub const REPORT_FILE: &str = "ipl_2025_analysis_report.txt";

/// Where to write the report: the given path, or [`REPORT_FILE`] in the working directory.
pub fn report_path(output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(REPORT_FILE))
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
