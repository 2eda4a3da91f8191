//! Tests for command handlers and the interactive menu

use std::io::Cursor;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::cli::{
    types::{Category, TeamCode},
    ChartCmd,
};
use crate::stats::fixtures::sample_analyzer;
use crate::StatsError;

fn context(as_json: bool) -> CommandContext {
    CommandContext::new(sample_analyzer(), Path::new("."), as_json)
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

fn run_menu_with(input: &str, report_path: &Path) -> String {
    let ctx = context(false);
    let mut out = Vec::new();
    menu::run_menu(&ctx, Cursor::new(input.to_string()), &mut out, report_path).unwrap();
    output(out)
}

#[test]
fn test_resolve_data_dir_prefers_flag() {
    let dir = resolve_data_dir(Some(PathBuf::from("/tmp/ipl")));
    assert_eq!(dir, PathBuf::from("/tmp/ipl"));
}

#[test]
fn test_resolve_data_dir_env_and_default() {
    std::env::set_var(crate::DATA_DIR_ENV_VAR, "/data/ipl");
    assert_eq!(resolve_data_dir(None), PathBuf::from("/data/ipl"));

    std::env::set_var(crate::DATA_DIR_ENV_VAR, "  ");
    assert_eq!(resolve_data_dir(None), PathBuf::from("."));

    std::env::remove_var(crate::DATA_DIR_ENV_VAR);
    assert_eq!(resolve_data_dir(None), PathBuf::from("."));
}

#[test]
fn test_context_load_missing_dir() {
    let dir = TempDir::new().unwrap();
    let result = CommandContext::load(Some(dir.path().join("absent")), false);

    match result {
        Err(StatsError::Load { table, .. }) => assert_eq!(table, crate::TableKind::Batting),
        other => panic!("Expected load error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_summary_text() {
    let ctx = context(false);
    let mut out = Vec::new();
    summary::handle_summary(&ctx, &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("IPL 2025 TOURNAMENT SUMMARY"));
    assert!(text.contains("Orange Cap: Sai Sudharsan (GT) - 759 runs"));
    assert!(text.contains("Purple Cap: Prasidh Krishna (GT) - 25 wickets"));
    assert!(text.contains("Table Topper: RCB"));
}

#[test]
fn test_summary_json() {
    let ctx = context(true);
    let mut out = Vec::new();
    summary::handle_summary(&ctx, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["total_teams"], 4);
    assert_eq!(json["points_leader"]["team"], "RCB");
    assert_eq!(json["batting_leader"]["player"], "Sai Sudharsan");
}

#[test]
fn test_standings_in_position_order() {
    let ctx = context(false);
    let mut out = Vec::new();
    summary::handle_standings(&ctx, &mut out).unwrap();

    let text = output(out);
    let gt = text.find(" 1. GT").unwrap();
    let srh = text.find(" 4. SRH").unwrap();
    assert!(gt < srh);
}

#[test]
fn test_top_performers_text_and_limit() {
    let ctx = context(false);
    let mut out = Vec::new();
    top_performers::handle_top_performers(&ctx, Category::Batting, 3, &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("TOP 3 BATTING PERFORMERS"));
    assert!(text.contains("Sai Sudharsan"));
    assert!(text.contains("Abhishek Sharma"));
    assert!(!text.contains("Virat Kohli"));
}

#[test]
fn test_top_performers_json() {
    let ctx = context(true);
    let mut out = Vec::new();
    top_performers::handle_top_performers(&ctx, Category::Fielding, 2, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["player"], "Jitesh Sharma");
    assert_eq!(rows[1]["player"], "Rahul Tewatia");
}

#[test]
fn test_team_handler() {
    let ctx = context(false);
    let mut out = Vec::new();
    team::handle_team(&ctx, &TeamCode::new("gt"), &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("TEAM ANALYSIS: GT"));
    assert!(text.contains("Shubman Gill"));
    assert!(text.contains("Prasidh Krishna"));
}

#[test]
fn test_team_handler_unknown_team() {
    let ctx = context(false);
    let mut out = Vec::new();
    let err = team::handle_team(&ctx, &TeamCode::new("XYZ"), &mut out).unwrap_err();

    assert!(matches!(err, StatsError::UnknownTeam { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_compare_handler() {
    let ctx = context(false);
    let mut out = Vec::new();
    compare::handle_compare(
        &ctx,
        "Virat Kohli",
        "Sai Sudharsan",
        Category::Batting,
        &mut out,
    )
    .unwrap();

    let text = output(out);
    assert!(text.contains("Batting comparison: Virat Kohli vs Sai Sudharsan"));
    assert!(text.contains("657"));
    assert!(text.contains("759"));
}

#[test]
fn test_compare_handler_unknown_player() {
    let ctx = context(false);
    let mut out = Vec::new();
    let err = compare::handle_compare(&ctx, "Virat Kohli", "Nobody", Category::Batting, &mut out)
        .unwrap_err();

    assert_eq!(err.to_string(), "Player not found: Nobody");
}

#[test]
fn test_report_to_file_and_stdout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports").join("ipl.txt");
    let ctx = context(false);

    let mut out = Vec::new();
    report::handle_report(&ctx, &path, false, &mut out).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("IPL 2025 COMPREHENSIVE ANALYSIS REPORT"));
    assert!(output(out).contains("Report generated"));

    let mut out = Vec::new();
    report::handle_report(&ctx, &path, true, &mut out).unwrap();
    assert_eq!(output(out), written);
}

#[test]
fn test_build_chart_variants() {
    let ctx = context(false);

    let batting = chart::build_chart(&ctx, &ChartCmd::Batting { limit: 2 }).unwrap();
    assert_eq!(batting.panels.len(), 4);

    let league = chart::build_chart(&ctx, &ChartCmd::League).unwrap();
    assert_eq!(league.panels.len(), 6);

    let err = chart::build_chart(
        &ctx,
        &ChartCmd::Team {
            team: TeamCode::new("XYZ"),
        },
    )
    .unwrap_err();
    assert!(matches!(err, StatsError::UnknownTeam { .. }));
}

#[test]
fn test_chart_json() {
    let ctx = context(true);
    let mut out = Vec::new();
    chart::handle_chart(&ctx, &ChartCmd::League, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["title"], "IPL 2025 - Team Performance Analysis");
    assert_eq!(json["panels"][5]["type"], "pie");
}

#[test]
fn test_menu_exit_immediately() {
    let dir = TempDir::new().unwrap();
    let text = run_menu_with("0\n", &dir.path().join("r.txt"));

    assert!(text.contains("Loaded data for 5 batsmen, 4 bowlers"));
    assert!(text.contains("Data directory: ."));
    assert!(text.contains("Thank you"));
}

#[test]
fn test_menu_ends_at_eof() {
    let dir = TempDir::new().unwrap();
    let text = run_menu_with("1\n", &dir.path().join("r.txt"));

    assert!(text.contains("IPL 2025 TOURNAMENT SUMMARY"));
    assert!(!text.contains("Thank you"));
}

#[test]
fn test_menu_invalid_choice_continues() {
    let dir = TempDir::new().unwrap();
    let text = run_menu_with("42\n3\n0\n", &dir.path().join("r.txt"));

    assert!(text.contains("Invalid choice"));
    assert!(text.contains("TOP 10 BOWLING PERFORMERS"));
    assert!(text.contains("Thank you"));
}

#[test]
fn test_menu_compare_prompts() {
    let dir = TempDir::new().unwrap();
    let text = run_menu_with(
        "8\nbowling\nNoor Ahmad\nTrent Boult\n0\n",
        &dir.path().join("r.txt"),
    );

    assert!(text.contains("Enter first player name: "));
    assert!(text.contains("Bowling comparison: Noor Ahmad vs Trent Boult"));
}

#[test]
fn test_menu_recovers_from_lookup_errors() {
    let dir = TempDir::new().unwrap();
    let text = run_menu_with(
        "8\ncricket\nVirat Kohli\nSai Sudharsan\n8\nbatting\nVirat Kohli\nNobody\n1\n0\n",
        &dir.path().join("r.txt"),
    );

    assert!(text.contains("❌ Invalid category: cricket"));
    assert!(!text.contains("Invalid choice"));
    assert!(text.contains("❌ Player not found: Nobody"));
    assert!(text.contains("IPL 2025 TOURNAMENT SUMMARY"));
    assert!(text.contains("Thank you"));
}

#[test]
fn test_menu_generates_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu_report.txt");
    let text = run_menu_with("9\n0\n", &path);

    assert!(text.contains("Report generated"));
    let report = std::fs::read_to_string(&path).unwrap();
    assert!(report.contains("TOP 5 BATSMEN"));
}
