//! Metric distribution per calendar period, as box-plot summaries.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::period_start;
use crate::config::Granularity;
use crate::pipeline::StandardFrame;
use crate::stats::FiveNumber;

/// One box: a period (optionally split by category) and its distribution.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodBox {
    /// First day of the period.
    pub period: NaiveDate,
    /// Category split, when a category column is mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub summary: FiveNumber,
    /// Number of non-missing metrics behind the summary.
    pub count: usize,
}

/// Box-plot distributions of the metric per calendar period.
#[derive(Debug, Clone, Serialize)]
pub struct BoxByPeriodChart {
    pub title: String,
    pub granularity: Granularity,
    pub groups: Vec<PeriodBox>,
}

/// Build the box-by-period chart, or `None` when no time column is mapped.
///
/// Rows with a missing time drop; groups without a usable metric are omitted.
pub fn box_by_period(frame: &StandardFrame, granularity: Granularity) -> Option<BoxByPeriodChart> {
    let time = frame.time.as_deref()?;

    let mut groups: IndexMap<(NaiveDate, Option<String>), Vec<f64>> = IndexMap::new();
    for (row, t) in time.iter().enumerate() {
        let Some(t) = t else { continue };
        let period = period_start(*t, granularity);
        let category = frame.cat.as_deref().map(|c| c[row].clone());
        let bucket = groups.entry((period, category)).or_default();
        if let Some(m) = frame.metric[row] {
            bucket.push(m);
        }
    }

    let mut boxes: Vec<PeriodBox> = groups
        .into_iter()
        .filter_map(|((period, category), values)| {
            FiveNumber::from_values(&values).map(|summary| PeriodBox {
                period,
                category,
                summary,
                count: values.len(),
            })
        })
        .collect();
    boxes.sort_by_key(|b| b.period);

    Some(BoxByPeriodChart {
        title: format!("Metric by {} Period", granularity.label()),
        granularity,
        groups: boxes,
    })
}
