//! Report command - render a view and export the HTML report.

use std::path::PathBuf;

use colored::Colorize;
use vizkit::{Chart, Dashboard, DashboardConfig, guess_roles, report::render_html};

use super::{load_input, merge_roles};
use crate::cli::{RoleArgs, ViewArgs};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: Option<PathBuf>,
    sample: bool,
    roles: RoleArgs,
    view: ViewArgs,
    output: Option<PathBuf>,
    open_report: bool,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = Dashboard::with_config(DashboardConfig {
        options: view.to_options(),
        ..DashboardConfig::default()
    });

    let (table, caption) = load_input(&mut dashboard, file.as_ref(), sample)?;
    println!("{} {}", "Loaded".cyan().bold(), caption.as_str().white());

    let mapped = merge_roles(guess_roles(&table.headers), &roles);
    if verbose {
        println!();
        println!("{}", "Roles:".yellow().bold());
        for (role, column) in [
            ("time", &mapped.time),
            ("metric", &mapped.metric),
            ("category", &mapped.category),
            ("id", &mapped.id),
        ] {
            println!("  {:10} {}", role, column.as_deref().unwrap_or("<none>"));
        }
        println!();
    }

    let result = dashboard.render(&table, &mapped)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let drawn = result
        .charts
        .iter()
        .filter(|c| !matches!(c, Chart::Empty { .. }))
        .count();
    println!(
        "Built {} charts and {} insight bullets over {} rows",
        drawn.to_string().white().bold(),
        result.bullets.len().to_string().white().bold(),
        result.row_count.to_string().white().bold()
    );

    let output_path = output.unwrap_or_else(|| match &file {
        Some(p) => {
            let mut out = p.clone();
            let stem = out.file_stem().unwrap_or_default().to_string_lossy().into_owned();
            out.set_file_name(format!("{}.report.html", stem));
            out
        }
        None => PathBuf::from("vizkit-report.html"),
    });

    let html = render_html(&result, &caption)?;
    std::fs::write(&output_path, html)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    if open_report {
        open::that(&output_path)?;
    }

    Ok(())
}
