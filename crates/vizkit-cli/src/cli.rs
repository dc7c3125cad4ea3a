//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use vizkit::{Aggregate, Granularity};

/// vizkit: dataset-agnostic CSV exploration kit
#[derive(Parser)]
#[command(name = "vizkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render charts and insights and export an HTML report
    Report {
        /// Path to the CSV file (omit with --sample)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Use the built-in sample dataset instead of a file
        #[arg(long)]
        sample: bool,

        #[command(flatten)]
        roles: RoleArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Output path for the report (default: <file>.report.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the report in the default browser
        #[arg(long)]
        open: bool,

        /// Print the view result as JSON instead of writing a report
        #[arg(long)]
        json: bool,
    },

    /// Show the columns of a file and the guessed role mapping
    Roles {
        /// Path to the CSV file (omit with --sample)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Use the built-in sample dataset instead of a file
        #[arg(long)]
        sample: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the insight bullets for a file
    Insights {
        /// Path to the CSV file (omit with --sample)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Use the built-in sample dataset instead of a file
        #[arg(long)]
        sample: bool,

        #[command(flatten)]
        roles: RoleArgs,

        /// Drop IQR outliers before summarizing
        #[arg(long)]
        trim_outliers: bool,
    },
}

/// Role overrides. Unset roles fall back to the guesser; pass `none` to
/// suppress a guessed optional role.
#[derive(Args)]
pub struct RoleArgs {
    /// Column to use for the time role
    #[arg(long, value_name = "COLUMN")]
    pub time: Option<String>,

    /// Column to use for the metric role
    #[arg(long, value_name = "COLUMN")]
    pub metric: Option<String>,

    /// Column to use for the category role
    #[arg(long, value_name = "COLUMN")]
    pub category: Option<String>,

    /// Column to use for the id role
    #[arg(long, value_name = "COLUMN")]
    pub id: Option<String>,
}

/// View options.
#[derive(Args)]
pub struct ViewArgs {
    /// Number of categories to keep before bucketing into "Other"
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(3..=20))]
    pub top_k: u64,

    /// Drop IQR outliers before charting
    #[arg(long)]
    pub trim_outliers: bool,

    /// Time granularity (year, quarter, month, week, day)
    #[arg(long, default_value = "month")]
    pub granularity: Granularity,

    /// Aggregation mode (sum, mean, count)
    #[arg(long, default_value = "sum")]
    pub agg: Aggregate,

    /// Render the category mix as a bar chart instead of a pie
    #[arg(long)]
    pub bar: bool,

    /// Log scale for the histogram X axis
    #[arg(long)]
    pub log_x: bool,

    /// Log scale for the histogram Y axis
    #[arg(long)]
    pub log_y: bool,

    /// Histogram bin count
    #[arg(long, default_value_t = 30)]
    pub bins: usize,
}

impl ViewArgs {
    /// Convert CLI arguments into library view options.
    pub fn to_options(&self) -> vizkit::ViewOptions {
        vizkit::ViewOptions {
            top_k: self.top_k as usize,
            trim_outliers: self.trim_outliers,
            granularity: self.granularity,
            category_as_bar: self.bar,
            aggregate: self.agg,
            log_x: self.log_x,
            log_y: self.log_y,
            bins: self.bins,
        }
    }
}
