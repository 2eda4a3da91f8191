//! Core utilities for the IPL statistics CLI
//!
//! - `files`: Report paths and file writing

pub mod files;

pub use files::{report_path, write_string, REPORT_FILE};
