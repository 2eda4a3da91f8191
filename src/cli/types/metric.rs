//! Named numeric columns shared by the player tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric statistic that can be ranked, compared or plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Matches,
    Runs,
    Average,
    StrikeRate,
    Fours,
    Sixes,
    HighestScore,
    Wickets,
    Economy,
    Catches,
    RunOuts,
    Dismissals,
}

impl Metric {
    /// Column name as it appears in the snake_case schema.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Matches => "matches",
            Metric::Runs => "runs",
            Metric::Average => "average",
            Metric::StrikeRate => "strike_rate",
            Metric::Fours => "fours",
            Metric::Sixes => "sixes",
            Metric::HighestScore => "highest_score",
            Metric::Wickets => "wickets",
            Metric::Economy => "economy",
            Metric::Catches => "catches",
            Metric::RunOuts => "run_outs",
            Metric::Dismissals => "dismissals",
        }
    }

    /// Whether values are whole counts (printed without decimals).
    pub fn is_count(&self) -> bool {
        !matches!(
            self,
            Metric::Average | Metric::StrikeRate | Metric::Economy
        )
    }

    /// Format a value of this metric for text output.
    pub fn format_value(&self, value: f64) -> String {
        if self.is_count() {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Metric::Matches => "Matches",
            Metric::Runs => "Runs",
            Metric::Average => "Average",
            Metric::StrikeRate => "Strike Rate",
            Metric::Fours => "Fours",
            Metric::Sixes => "Sixes",
            Metric::HighestScore => "Highest Score",
            Metric::Wickets => "Wickets",
            Metric::Economy => "Economy",
            Metric::Catches => "Catches",
            Metric::RunOuts => "Run Outs",
            Metric::Dismissals => "Dismissals",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_labels() {
        assert_eq!(Metric::StrikeRate.to_string(), "Strike Rate");
        assert_eq!(Metric::RunOuts.to_string(), "Run Outs");
        assert_eq!(Metric::StrikeRate.column(), "strike_rate");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(Metric::Runs.format_value(759.0), "759");
        assert_eq!(Metric::Economy.format_value(7.456), "7.46");
        assert_eq!(Metric::Average.format_value(54.2), "54.20");
    }

    #[test]
    fn test_metric_serde() {
        let json = serde_json::to_string(&Metric::StrikeRate).unwrap();
        assert_eq!(json, "\"strike_rate\"");
    }
}
