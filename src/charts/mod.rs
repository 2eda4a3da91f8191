//! Chart descriptions built from query results
//!
//! - `model`: Serializable chart, panel and series types
//! - `builders`: Dashboards over top performers, standings, teams and comparisons
//! - `render`: Plain-text rendering

pub mod builders;
pub mod model;
pub mod render;


pub use builders::{
    batting_dashboard, bowling_dashboard, comparison_chart, league_dashboard, team_dashboard,
};
pub use model::{Chart, Orientation, Panel, PanelKind, ScatterPoint, Series, Slice};
pub use render::render_text;
