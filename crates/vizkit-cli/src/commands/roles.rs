//! Roles command - show columns and the guessed role mapping.

use std::path::PathBuf;

use colored::Colorize;
use vizkit::{Dashboard, guess_roles};

use super::load_input;

pub fn run(
    file: Option<PathBuf>,
    sample: bool,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = Dashboard::new();
    let (table, caption) = load_input(&mut dashboard, file.as_ref(), sample)?;

    let guessed = guess_roles(&table.headers);

    if json {
        println!("{}", serde_json::to_string_pretty(&guessed)?);
        return Ok(());
    }

    println!("{} {}", "Columns of".cyan().bold(), caption.white());
    println!();

    for column in &table.headers {
        let mut tags = Vec::new();
        for (role, mapped) in [
            ("time", &guessed.time),
            ("metric", &guessed.metric),
            ("category", &guessed.category),
            ("id", &guessed.id),
        ] {
            if mapped.as_deref() == Some(column.as_str()) {
                tags.push(role);
            }
        }

        if tags.is_empty() {
            println!("  {}", column);
        } else {
            println!("  {:24} {}", column, tags.join(", ").green().bold());
        }
    }

    if verbose {
        println!();
        println!(
            "Override with {} or suppress with {}",
            "--time/--metric/--category/--id".cyan(),
            "--<role> none".cyan()
        );
    }

    Ok(())
}
