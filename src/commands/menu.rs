//! Interactive numbered menu.
//!
//! Each selection key maps to one [`MenuAction`]; the loop only reads a key,
//! looks it up and runs the matching command handler.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::warn;

use crate::{
    cli::{types::Category, ChartCmd},
    Result,
};

use super::{
    chart::handle_chart, compare::handle_compare, report::handle_report, summary::handle_summary,
    top_performers::handle_top_performers, top_performers::DEFAULT_TOP_N, CommandContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Summary,
    TopBatting,
    TopBowling,
    TopFielding,
    BattingDashboard,
    BowlingDashboard,
    LeagueDashboard,
    ComparePlayers,
    GenerateReport,
    Exit,
}

/// Selection keys in display order.
pub const MENU: [(&str, MenuAction, &str); 10] = [
    ("1", MenuAction::Summary, "Tournament Summary"),
    ("2", MenuAction::TopBatting, "Top Batting Performers"),
    ("3", MenuAction::TopBowling, "Top Bowling Performers"),
    ("4", MenuAction::TopFielding, "Top Fielding Performers"),
    ("5", MenuAction::BattingDashboard, "Visualize Top Batsmen"),
    ("6", MenuAction::BowlingDashboard, "Visualize Bowling Analysis"),
    ("7", MenuAction::LeagueDashboard, "Team Analysis"),
    ("8", MenuAction::ComparePlayers, "Compare Players"),
    ("9", MenuAction::GenerateReport, "Generate Report"),
    ("0", MenuAction::Exit, "Exit"),
];

impl MenuAction {
    /// Look up the action for a selection key.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        MENU.iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, action, _)| *action)
    }
}

fn print_menu(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n📋 MENU OPTIONS:")?;
    for (key, _, label) in MENU.iter() {
        writeln!(out, "{}. {}", key, label)?;
    }
    write!(out, "\nEnter your choice (0-9): ")?;
    out.flush()?;
    Ok(())
}

/// Read one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead>(
    input: &mut R,
    out: &mut dyn Write,
    question: &str,
) -> Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;
    read_line(input)
}

/// Prompt for a category and two names, then compare.
fn compare_from_prompts<R: BufRead>(
    ctx: &CommandContext,
    input: &mut R,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "Available categories: batting, bowling, fielding")?;
    let Some(category) = prompt(input, out, "Enter category: ")? else {
        return Ok(());
    };
    let Some(first) = prompt(input, out, "Enter first player name: ")? else {
        return Ok(());
    };
    let Some(second) = prompt(input, out, "Enter second player name: ")? else {
        return Ok(());
    };
    // read every prompt before validating the category
    let category: Category = category.parse()?;
    handle_compare(ctx, &first, &second, category, out)
}

/// Run a single menu action.
pub fn execute<R: BufRead>(
    action: MenuAction,
    ctx: &CommandContext,
    input: &mut R,
    out: &mut dyn Write,
    report_path: &Path,
) -> Result<()> {
    match action {
        MenuAction::Summary => handle_summary(ctx, out),
        MenuAction::TopBatting => {
            handle_top_performers(ctx, Category::Batting, DEFAULT_TOP_N, out)
        }
        MenuAction::TopBowling => {
            handle_top_performers(ctx, Category::Bowling, DEFAULT_TOP_N, out)
        }
        MenuAction::TopFielding => {
            handle_top_performers(ctx, Category::Fielding, DEFAULT_TOP_N, out)
        }
        MenuAction::BattingDashboard => handle_chart(
            ctx,
            &ChartCmd::Batting {
                limit: DEFAULT_TOP_N,
            },
            out,
        ),
        MenuAction::BowlingDashboard => handle_chart(
            ctx,
            &ChartCmd::Bowling {
                limit: DEFAULT_TOP_N,
            },
            out,
        ),
        MenuAction::LeagueDashboard => handle_chart(ctx, &ChartCmd::League, out),
        MenuAction::ComparePlayers => compare_from_prompts(ctx, input, out),
        MenuAction::GenerateReport => handle_report(ctx, report_path, false, out),
        MenuAction::Exit => Ok(()),
    }
}

/// Run the menu until `0` or end of input.
///
/// Lookup errors (unknown team, player or category) are printed and the
/// loop continues; anything else ends it.
pub fn run_menu<R: BufRead>(
    ctx: &CommandContext,
    mut input: R,
    out: &mut dyn Write,
    report_path: &Path,
) -> Result<()> {
    writeln!(out, "🏏 Welcome to IPL 2025 Statistics Analyzer!")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(
        out,
        "📊 Loaded data for {} batsmen, {} bowlers",
        ctx.analyzer.batting().len(),
        ctx.analyzer.bowling().len()
    )?;
    writeln!(
        out,
        "🥅 {} fielders, and {} teams",
        ctx.analyzer.fielding().len(),
        ctx.analyzer.teams().len()
    )?;
    writeln!(out, "📂 Data directory: {}", ctx.data_dir.display())?;

    loop {
        print_menu(out)?;
        let Some(choice) = read_line(&mut input)? else {
            writeln!(out)?;
            break;
        };

        let Some(action) = MenuAction::from_key(&choice) else {
            writeln!(out, "⚠ Invalid choice. Please try again.")?;
            continue;
        };

        if action == MenuAction::Exit {
            writeln!(out, "🙏 Thank you for using IPL 2025 Statistics Analyzer!")?;
            break;
        }

        match execute(action, ctx, &mut input, out, report_path) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "menu action failed");
                writeln!(out, "❌ {}", e)?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
