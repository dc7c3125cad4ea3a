//! vizkit CLI - dataset-agnostic CSV exploration kit.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report {
            file,
            sample,
            roles,
            view,
            output,
            open,
            json,
        } => commands::report::run(file, sample, roles, view, output, open, json, cli.verbose),

        Commands::Roles { file, sample, json } => {
            commands::roles::run(file, sample, json, cli.verbose)
        }

        Commands::Insights {
            file,
            sample,
            roles,
            trim_outliers,
        } => commands::insights::run(file, sample, roles, trim_outliers, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
