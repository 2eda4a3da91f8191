//! Type-safe wrappers and enums for tournament statistics.

pub mod category;
pub mod ids;
pub mod metric;

pub use category::Category;
pub use ids::TeamCode;
pub use metric::Metric;
