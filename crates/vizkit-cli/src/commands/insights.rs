//! Insights command - print the text bullets for a file.

use std::path::PathBuf;

use colored::Colorize;
use vizkit::insights::bullets;
use vizkit::pipeline::{DEFAULT_IQR_MULTIPLIER, standardize, trim_outliers_iqr};
use vizkit::{Dashboard, guess_roles};

use super::{load_input, merge_roles};
use crate::cli::RoleArgs;

pub fn run(
    file: Option<PathBuf>,
    sample: bool,
    roles: RoleArgs,
    trim_outliers: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = Dashboard::new();
    let (table, caption) = load_input(&mut dashboard, file.as_ref(), sample)?;

    let mapped = merge_roles(guess_roles(&table.headers), &roles);
    let mut frame = standardize(&table, &mapped)?;
    if trim_outliers {
        frame = trim_outliers_iqr(&frame, DEFAULT_IQR_MULTIPLIER);
    }

    if verbose {
        println!("{} {}", "Insights for".cyan().bold(), caption.white());
        if trim_outliers {
            println!(
                "  ({} of {} rows after outlier trimming)",
                frame.row_count(),
                table.row_count()
            );
        }
        println!();
    }

    let pts = bullets(&frame);
    if pts.is_empty() {
        println!("{}", "No usable metric values - nothing to summarize.".yellow());
        return Ok(());
    }

    for point in pts {
        println!("{} {}", "•".green().bold(), point);
    }

    Ok(())
}
