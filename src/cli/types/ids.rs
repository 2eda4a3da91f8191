//! ID types for teams and players.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for team short codes (`GT`, `MI`, `RCB`).
///
/// Codes are stored as given; lookups compare them ASCII case-insensitively.
///
/// # Examples
///
/// ```rust
/// use ipl_stats::TeamCode;
///
/// let code = TeamCode::new("gt");
/// assert!(code.matches("GT"));
/// assert_eq!(code.to_string(), "gt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamCode(pub String);

impl TeamCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `team` names the same team, ignoring ASCII case.
    pub fn matches(&self, team: &str) -> bool {
        self.0.eq_ignore_ascii_case(team)
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamCode {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(StatsError::UnknownTeam {
                team: s.to_string(),
            });
        }
        Ok(Self(code.to_string()))
    }
}

impl From<&str> for TeamCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_code_matches_ignores_case() {
        let code = TeamCode::new("SRH");
        assert!(code.matches("srh"));
        assert!(code.matches("SRH"));
        assert!(!code.matches("RR"));
    }

    #[test]
    fn test_team_code_from_str_trims() {
        let code: TeamCode = "  MI ".parse().unwrap();
        assert_eq!(code.as_str(), "MI");
    }

    #[test]
    fn test_team_code_from_str_empty() {
        assert!("   ".parse::<TeamCode>().is_err());
    }

    #[test]
    fn test_team_code_serde() {
        let code = TeamCode::new("GT");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"GT\"");
        let back: TeamCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
