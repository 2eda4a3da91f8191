//! Statistical categories and their ranking rules.

use super::metric::Metric;
use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player statistics categories.
///
/// Each category owns one player table and knows which column ranks it
/// and which columns are shown when two players are compared.
///
/// # Examples
///
/// ```rust
/// use ipl_stats::{Category, Metric};
///
/// let category: Category = "Bowling".parse().unwrap();
/// assert_eq!(category, Category::Bowling);
/// assert_eq!(category.primary_metric(), Metric::Wickets);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Batting,
    Bowling,
    Fielding,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Batting, Category::Bowling, Category::Fielding];

    /// Column the category's table is ranked by, descending.
    pub fn primary_metric(&self) -> Metric {
        match self {
            Category::Batting => Metric::Runs,
            Category::Bowling => Metric::Wickets,
            Category::Fielding => Metric::Catches,
        }
    }

    /// Metrics shown side by side in a player comparison.
    pub fn comparison_metrics(&self) -> &'static [Metric] {
        match self {
            Category::Batting => &[
                Metric::Runs,
                Metric::Average,
                Metric::StrikeRate,
                Metric::Fours,
                Metric::Sixes,
            ],
            Category::Bowling => &[
                Metric::Wickets,
                Metric::Economy,
                Metric::Average,
                Metric::StrikeRate,
            ],
            Category::Fielding => &[
                Metric::Catches,
                Metric::RunOuts,
                Metric::Dismissals,
                Metric::Matches,
            ],
        }
    }

    /// Columns listed next to player and team in a top performers table.
    pub fn listing_metrics(&self) -> &'static [Metric] {
        match self {
            Category::Batting => &[Metric::Runs, Metric::Average, Metric::StrikeRate],
            Category::Bowling => &[Metric::Wickets, Metric::Economy, Metric::Average],
            Category::Fielding => &[Metric::Catches, Metric::Matches],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Batting => "batting",
            Category::Bowling => "bowling",
            Category::Fielding => "fielding",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "batting" => Ok(Category::Batting),
            "bowling" => Ok(Category::Bowling),
            "fielding" => Ok(Category::Fielding),
            _ => Err(StatsError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}
