//! CLI command implementations.

pub mod insights;
pub mod report;
pub mod roles;

use std::path::PathBuf;
use std::sync::Arc;

use vizkit::{Dashboard, DataTable, Roles};

use crate::cli::RoleArgs;

/// Sentinel value that suppresses a guessed role on the command line.
const NONE_SENTINEL: &str = "none";

/// Load the input table from a file or the built-in sample.
///
/// Returns the table plus a caption describing it.
pub fn load_input(
    dashboard: &mut Dashboard,
    file: Option<&PathBuf>,
    sample: bool,
) -> Result<(Arc<DataTable>, String), Box<dyn std::error::Error>> {
    if sample {
        let table = dashboard.load_sample();
        let caption = format!(
            "sample dataset ({} rows × {} cols)",
            table.row_count(),
            table.column_count()
        );
        return Ok((Arc::new(table), caption));
    }

    let Some(path) = file else {
        return Err("Provide a FILE argument or --sample".into());
    };
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    let (table, source) = dashboard.load(path)?;
    let caption = format!(
        "{} ({} rows × {} cols, {})",
        source.file, source.row_count, source.column_count, source.format
    );
    Ok((table, caption))
}

/// Overlay CLI role overrides onto guessed roles.
///
/// An explicit flag wins over the guess; the value `none` clears a role.
pub fn merge_roles(guessed: Roles, args: &RoleArgs) -> Roles {
    fn overlay(guess: Option<String>, flag: &Option<String>) -> Option<String> {
        match flag {
            Some(value) if value.eq_ignore_ascii_case(NONE_SENTINEL) => None,
            Some(value) => Some(value.clone()),
            None => guess,
        }
    }

    Roles {
        time: overlay(guessed.time, &args.time),
        metric: overlay(guessed.metric, &args.metric),
        category: overlay(guessed.category, &args.category),
        id: overlay(guessed.id, &args.id),
    }
}
