//! Plain-text chart rendering for terminals

use super::model::{Chart, Orientation, Panel, PanelKind};
use std::fmt::Write;

/// Width in characters of the longest bar.
pub const BAR_WIDTH: usize = 40;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn render_panel(out: &mut String, panel: &Panel) {
    let _ = writeln!(out, "{}", panel.title);
    let _ = writeln!(out, "{}", "-".repeat(panel.title.chars().count()));

    match &panel.kind {
        PanelKind::Bar {
            categories,
            series,
            orientation,
            y_label,
            ..
        } => {
            let label_width = categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
            let max = series
                .iter()
                .flat_map(|s| s.values.iter())
                .fold(0.0_f64, |acc, v| acc.max(v.abs()));
            let grouped = series.len() > 1;

            if *orientation == Orientation::Vertical {
                let _ = writeln!(out, "({})", y_label);
            }
            for (i, category) in categories.iter().enumerate() {
                for s in series {
                    let value = s.values.get(i).copied().unwrap_or_default();
                    let name = if grouped {
                        format!("{} [{}]", category, s.name)
                    } else {
                        category.clone()
                    };
                    let marker = if value < 0.0 { "-" } else { "" };
                    let _ = writeln!(
                        out,
                        "{:<w$} | {}{} {}",
                        name,
                        marker,
                        bar(value.abs(), max),
                        format_number(value),
                        w = if grouped {
                            label_width + s.name.len() + 3
                        } else {
                            label_width
                        }
                    );
                }
            }
        }
        PanelKind::Scatter {
            x_label,
            y_label,
            points,
        } => {
            let _ = writeln!(out, "{:<24} {:>12} {:>12}", "", x_label, y_label);
            for p in points {
                let _ = writeln!(
                    out,
                    "{:<24} {:>12} {:>12}",
                    p.label,
                    format_number(p.x),
                    format_number(p.y)
                );
            }
        }
        PanelKind::Pie { slices } => {
            let total: f64 = slices.iter().map(|s| s.value).sum();
            for s in slices {
                let share = if total > 0.0 {
                    s.value / total * 100.0
                } else {
                    0.0
                };
                let _ = writeln!(out, "{:<20} {:>5.1}%", s.label, share);
            }
        }
    }
}

/// Render every panel of `chart` as text.
pub fn render_text(chart: &Chart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    let _ = writeln!(out, "{}", "=".repeat(chart.title.chars().count()));

    for panel in &chart.panels {
        out.push('\n');
        render_panel(&mut out, panel);
    }
    out
}
