//! Resampled metric trend over time.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::period_start;
use crate::config::{Aggregate, Granularity};
use crate::pipeline::StandardFrame;

/// One resampled point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// First day of the period.
    pub period: NaiveDate,
    pub value: f64,
}

/// Metric resampled to one point per observed period.
#[derive(Debug, Clone, Serialize)]
pub struct TrendLineChart {
    pub title: String,
    pub granularity: Granularity,
    pub aggregate: Aggregate,
    pub points: Vec<TrendPoint>,
}

/// Build the trend line, or `None` when it cannot be drawn.
///
/// Requires a mapped time column, at least one row with a parsed time, and a
/// usable metric. Aggregation is sum or mean; any other requested mode
/// resamples as sum.
pub fn trend_line(
    frame: &StandardFrame,
    granularity: Granularity,
    aggregate: Aggregate,
) -> Option<TrendLineChart> {
    let time = frame.time.as_deref()?;
    if !frame.has_metric_values() {
        return None;
    }

    let aggregate = match aggregate {
        Aggregate::Mean => Aggregate::Mean,
        _ => Aggregate::Sum,
    };

    // (sum, non-missing count) per observed period
    let mut periods: IndexMap<NaiveDate, (f64, usize)> = IndexMap::new();
    let mut timed_rows = 0usize;
    for (row, t) in time.iter().enumerate() {
        let Some(t) = t else { continue };
        timed_rows += 1;
        let entry = periods.entry(period_start(*t, granularity)).or_insert((0.0, 0));
        if let Some(m) = frame.metric[row] {
            entry.0 += m;
            entry.1 += 1;
        }
    }
    if timed_rows == 0 {
        return None;
    }

    let mut points: Vec<TrendPoint> = periods
        .into_iter()
        .filter_map(|(period, (sum, n))| {
            let value = match aggregate {
                Aggregate::Mean if n == 0 => return None,
                Aggregate::Mean => sum / n as f64,
                _ => sum,
            };
            Some(TrendPoint { period, value })
        })
        .collect();
    points.sort_by_key(|p| p.period);

    Some(TrendLineChart {
        title: format!("{} over time ({})", capitalize(aggregate.label()), granularity),
        granularity,
        aggregate,
        points,
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
