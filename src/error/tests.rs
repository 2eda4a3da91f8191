//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_load_error_names_source_and_column() {
        let error = StatsError::load(
            TableKind::Bowling,
            "data/ipl_2025_bowling_stats.csv",
            LoadProblem::MissingColumn("Wickets".to_string()),
        );

        let error_string = error.to_string();
        assert!(error_string.contains("bowling"));
        assert!(error_string.contains("data/ipl_2025_bowling_stats.csv"));
        assert!(error_string.contains("missing column 'Wickets'"));
    }

    #[test]
    fn test_load_error_unexpected_column() {
        let error = StatsError::load(
            TableKind::Team,
            "teams.csv",
            LoadProblem::UnexpectedColumn("Captain".to_string()),
        );
        assert!(error.to_string().contains("unexpected column 'Captain'"));
    }

    #[test]
    fn test_load_problem_row_messages() {
        let problem = LoadProblem::InvalidRow {
            row: 3,
            message: "invalid digit".to_string(),
        };
        assert_eq!(problem.to_string(), "row 3: invalid digit");

        let problem = LoadProblem::NegativeValue {
            row: 7,
            column: "economy".to_string(),
        };
        assert_eq!(
            problem.to_string(),
            "row 7: column 'economy' must not be negative"
        );

        let problem = LoadProblem::NonFiniteValue {
            row: 2,
            column: "net_run_rate".to_string(),
        };
        assert_eq!(
            problem.to_string(),
            "row 2: column 'net_run_rate' must be a finite number"
        );
    }

    #[test]
    fn test_invalid_category_error() {
        let error = StatsError::InvalidCategory {
            category: "keeping".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid category"));
        assert!(error_string.contains("keeping"));
    }

    #[test]
    fn test_unknown_team_error() {
        let error = StatsError::UnknownTeam {
            team: "XYZ".to_string(),
        };
        assert_eq!(error.to_string(), "Team not found: XYZ");
    }

    #[test]
    fn test_unknown_player_lists_every_name() {
        let error = StatsError::UnknownPlayer {
            names: vec!["Alpha".to_string(), "Beta".to_string()],
        };
        assert_eq!(error.to_string(), "Player not found: Alpha, Beta");

        let error = StatsError::UnknownPlayer {
            names: vec!["Unknown Player".to_string()],
        };
        assert_eq!(error.to_string(), "Player not found: Unknown Player");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(StatsError::UnknownTeam {
            team: "X".to_string()
        }
        .is_recoverable());
        assert!(StatsError::InvalidCategory {
            category: "x".to_string()
        }
        .is_recoverable());
        assert!(StatsError::UnknownPlayer { names: vec![] }.is_recoverable());

        let load = StatsError::load(TableKind::Batting, "b.csv", LoadProblem::Empty);
        assert!(!load.is_recoverable());
    }

    #[test]
    fn test_table_kind_display() {
        assert_eq!(TableKind::Batting.to_string(), "batting");
        assert_eq!(TableKind::Bowling.to_string(), "bowling");
        assert_eq!(TableKind::Fielding.to_string(), "fielding");
        assert_eq!(TableKind::Team.to_string(), "team");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        let error_trait: &dyn std::error::Error = &stats_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(StatsError::UnknownTeam {
                team: "ABC".to_string(),
            })
        }

        match test_function().unwrap_err() {
            StatsError::UnknownTeam { team } => assert_eq!(team, "ABC"),
            _ => panic!("Expected UnknownTeam error"),
        }
    }
}
