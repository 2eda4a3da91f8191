//! Loaded tournament tables and the queries over them
//!
//! This module is organized into logical components:
//! - `models`: Record and result types
//! - `schema`: Table sources, column schemas and loading
//! - `queries`: Top performers, team and player lookups
//! - `analysis`: Standings and tournament summary
//! - `report`: Plain-text formatting and the generated report

pub mod analysis;
pub mod models;
pub mod queries;
pub mod report;
pub mod schema;

#[cfg(test)]
pub(crate) mod fixtures;


pub use models::*;
pub use schema::{StatsAnalyzer, TableSources};
