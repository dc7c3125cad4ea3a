//! Vizkit: dataset-agnostic CSV exploration kit.
//!
//! Vizkit takes an arbitrary CSV, a mapping of its columns to semantic roles
//! (time, metric, category, id), and produces chart-ready aggregations, text
//! insights, and a self-contained HTML report.
//!
//! # Core Principles
//!
//! - **Dataset-agnostic**: no assumed schema; roles are guessed and overridable
//! - **Non-destructive**: original columns are never modified, only derived from
//! - **Forgiving**: unparsable values become missing, never errors
//!
//! # Example
//!
//! ```no_run
//! use vizkit::{Dashboard, guess_roles};
//!
//! let mut dashboard = Dashboard::new();
//! let (table, source) = dashboard.load("channels.csv").unwrap();
//! let roles = guess_roles(&table.headers);
//! let view = dashboard.render(&table, &roles).unwrap();
//!
//! println!("{}: {} charts, {} bullets", source.file, view.charts.len(), view.bullets.len());
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod input;
pub mod insights;
pub mod pipeline;
pub mod report;
pub mod roles;
pub mod stats;

mod dashboard;

pub use crate::dashboard::{Dashboard, DashboardConfig, ViewResult};
pub use charts::Chart;
pub use config::{Aggregate, Granularity, ViewOptions};
pub use error::{Result, VizkitError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use pipeline::{StandardFrame, standardize, topk_bucket, trim_outliers_iqr};
pub use roles::{Roles, guess_roles};
