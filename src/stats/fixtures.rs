//! Small in-memory tables shared by unit tests.

use super::{models::*, schema::StatsAnalyzer};

pub fn batter(player: &str, team: &str, runs: u32) -> BattingRecord {
    BattingRecord {
        player: player.to_string(),
        team: team.to_string(),
        matches: 14,
        runs,
        average: runs as f64 / 12.0,
        strike_rate: 150.0,
        fours: runs / 10,
        sixes: runs / 30,
        highest_score: runs / 6,
    }
}

pub fn bowler(player: &str, team: &str, wickets: u32) -> BowlingRecord {
    BowlingRecord {
        player: player.to_string(),
        team: team.to_string(),
        matches: 14,
        wickets,
        economy: 8.1,
        average: 20.5,
        strike_rate: 15.2,
        best_figures: "3/25".to_string(),
    }
}

pub fn fielder(player: &str, team: &str, catches: u32) -> FieldingRecord {
    FieldingRecord {
        player: player.to_string(),
        team: team.to_string(),
        matches: 14,
        catches,
        run_outs: 1,
        dismissals: catches + 1,
    }
}

pub fn team(code: &str, position: u32, points: u32, net_run_rate: f64) -> TeamRecord {
    TeamRecord {
        team: code.to_string(),
        position,
        matches: 14,
        won: points / 2,
        lost: 14 - points / 2,
        points,
        net_run_rate,
        total_runs: 2400,
        wickets: 85,
        highest_total: 220,
    }
}

/// Four teams, a handful of players in each table.
pub fn sample_analyzer() -> StatsAnalyzer {
    StatsAnalyzer::from_tables(
        vec![
            batter("Sai Sudharsan", "GT", 759),
            batter("Suryakumar Yadav", "MI", 717),
            batter("Abhishek Sharma", "SRH", 700),
            batter("Shubman Gill", "GT", 650),
            batter("Virat Kohli", "RCB", 657),
        ],
        vec![
            bowler("Prasidh Krishna", "GT", 25),
            bowler("Noor Ahmad", "RCB", 24),
            bowler("Josh Hazlewood", "RCB", 22),
            bowler("Trent Boult", "MI", 22),
        ],
        vec![
            fielder("Jitesh Sharma", "RCB", 14),
            fielder("Tilak Varma", "MI", 11),
            fielder("Rahul Tewatia", "GT", 14),
        ],
        vec![
            team("GT", 1, 18, 0.254),
            team("RCB", 2, 18, 0.482),
            team("MI", 3, 16, 1.142),
            team("SRH", 4, 13, -0.241),
        ],
    )
    .unwrap()
}
