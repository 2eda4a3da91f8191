//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Category, TeamCode};

/// Options accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Directory holding the four CSV files (or set `IPL_STATS_DATA_DIR` env var).
    #[clap(long, short = 'd', global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output results as JSON instead of text.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log table loading and lookups to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "ipl-stats", about = "IPL 2025 Statistics Analyzer", version)]
pub struct IplStats {
    #[clap(flatten)]
    pub global: GlobalOpts,

    /// Runs the interactive menu when omitted.
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tournament summary: table topper, Orange and Purple Caps, totals.
    Summary,

    /// Top performers of a category, ranked by runs, wickets or catches.
    Top {
        /// batting | bowling | fielding
        category: Category,

        /// Number of players to list.
        #[clap(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// A team's standing and its players in every category.
    Team {
        /// Team short code, e.g. `GT`.
        team: TeamCode,
    },

    /// Compare two players side by side.
    Compare {
        first: String,
        second: String,

        /// batting | bowling | fielding
        #[clap(long, short, default_value_t = Category::Batting)]
        category: Category,
    },

    /// Full points table in position order.
    Standings,

    /// Write the full text report.
    Report {
        /// Report file (defaults to `ipl_2025_analysis_report.txt`).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Print the report instead of writing a file.
        #[clap(long)]
        stdout: bool,
    },

    /// Build a chart and print it as text (or JSON with `--json`).
    Chart {
        #[clap(subcommand)]
        chart: ChartCmd,
    },

    /// Interactive numbered menu.
    Menu,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ChartCmd {
    /// Runs, average vs strike rate, boundaries and teams of the top batters.
    Batting {
        #[clap(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// Wickets, economy, average and teams of the top bowlers.
    Bowling {
        #[clap(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// Points, net run rate, runs, results and playoff split for every team.
    League,

    /// One team's runs, wickets and catches per player.
    Team { team: TeamCode },

    /// Two players' metrics as grouped bars.
    Compare {
        first: String,
        second: String,

        #[clap(long, short, default_value_t = Category::Batting)]
        category: Category,
    },
}
