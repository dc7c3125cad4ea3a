//! View configuration passed into every pipeline stage.

use serde::{Deserialize, Serialize};

/// Calendar granularity for time-based charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    Quarter,
    Month,
    Week,
    Day,
}

impl Granularity {
    /// Short label used in chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Year => "Year",
            Granularity::Quarter => "Quarter",
            Granularity::Month => "Month",
            Granularity::Week => "Week",
            Granularity::Day => "Day",
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "year" | "y" => Ok(Granularity::Year),
            "quarter" | "q" => Ok(Granularity::Quarter),
            "month" | "m" => Ok(Granularity::Month),
            "week" | "w" => Ok(Granularity::Week),
            "day" | "d" => Ok(Granularity::Day),
            _ => Err(format!(
                "Unknown granularity: {}. Use year, quarter, month, week, or day.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// How to aggregate the metric within a group or period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Sum,
    Mean,
    Count,
}

impl Aggregate {
    /// Label used in chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Aggregate::Sum => "sum",
            Aggregate::Mean => "mean",
            Aggregate::Count => "count",
        }
    }
}

impl std::str::FromStr for Aggregate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Aggregate::Sum),
            "mean" | "avg" => Ok(Aggregate::Mean),
            "count" => Ok(Aggregate::Count),
            _ => Err(format!("Unknown aggregation: {}. Use sum, mean, or count.", s)),
        }
    }
}

impl std::fmt::Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Options for one view render.
///
/// Immutable once built; every pipeline stage receives it by reference instead
/// of reading ambient UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// How many categories to keep before bucketing the rest as "Other".
    pub top_k: usize,
    /// Whether to drop IQR outliers before charting.
    pub trim_outliers: bool,
    /// Calendar granularity for the time charts.
    pub granularity: Granularity,
    /// Render the category mix as a bar instead of a pie.
    pub category_as_bar: bool,
    /// Aggregation mode for category mix and trend line.
    pub aggregate: Aggregate,
    /// Log-scale toggle for the histogram X axis.
    pub log_x: bool,
    /// Log-scale toggle for the histogram Y axis.
    pub log_y: bool,
    /// Histogram bin count.
    pub bins: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_k: 10,
            trim_outliers: false,
            granularity: Granularity::Month,
            category_as_bar: false,
            aggregate: Aggregate::Sum,
            log_x: false,
            log_y: false,
            bins: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_granularity_round_trip() {
        for g in [
            Granularity::Year,
            Granularity::Quarter,
            Granularity::Month,
            Granularity::Week,
            Granularity::Day,
        ] {
            assert_eq!(Granularity::from_str(&g.to_string()).unwrap(), g);
        }
    }

    #[test]
    fn test_aggregate_aliases() {
        assert_eq!(Aggregate::from_str("avg").unwrap(), Aggregate::Mean);
        assert!(Aggregate::from_str("max").is_err());
    }
}
