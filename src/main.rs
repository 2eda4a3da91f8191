//! Entry point: parse CLI and dispatch to command handlers.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use ipl_stats::{
    cli::{Commands, IplStats},
    commands::{
        chart::handle_chart, compare::handle_compare, menu::run_menu, report::handle_report,
        summary::handle_standings, summary::handle_summary, team::handle_team,
        top_performers::handle_top_performers, CommandContext,
    },
    core::report_path,
};
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` wins over the `--verbose` default.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = IplStats::parse();
    init_logging(app.global.verbose);

    let ctx = CommandContext::load(app.global.data_dir, app.global.json)
        .context("could not load the IPL 2025 tables")?;

    let mut out = io::stdout().lock();

    match app.command {
        Some(Commands::Summary) => handle_summary(&ctx, &mut out)?,
        Some(Commands::Standings) => handle_standings(&ctx, &mut out)?,
        Some(Commands::Top { category, limit }) => {
            handle_top_performers(&ctx, category, limit, &mut out)?
        }
        Some(Commands::Team { team }) => handle_team(&ctx, &team, &mut out)?,
        Some(Commands::Compare {
            first,
            second,
            category,
        }) => handle_compare(&ctx, &first, &second, category, &mut out)?,
        Some(Commands::Report { output, stdout }) => {
            let path = report_path(output.as_deref());
            handle_report(&ctx, &path, stdout, &mut out)?
        }
        Some(Commands::Chart { chart }) => handle_chart(&ctx, &chart, &mut out)?,
        Some(Commands::Menu) | None => {
            let path = report_path(None);
            run_menu(&ctx, io::stdin().lock(), &mut out, &path)?
        }
    }

    out.flush()?;
    Ok(())
}
