//! Chart builders: pure functions from a frame to renderable payloads.

mod category;
mod histogram;
mod timebox;
mod trend;

pub use category::{CategoryMixChart, CategorySlice, category_mix};
pub use histogram::{HistogramBin, HistogramChart, histogram};
pub use timebox::{BoxByPeriodChart, PeriodBox, box_by_period};
pub use trend::{TrendLineChart, TrendPoint, trend_line};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::config::Granularity;

/// A renderable chart payload.
///
/// `Empty` is the explanatory placeholder for views whose required columns
/// are not mapped; builders that cannot degrade that way return `None`
/// instead and the view simply omits the chart.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Histogram(HistogramChart),
    CategoryMix(CategoryMixChart),
    BoxByPeriod(BoxByPeriodChart),
    TrendLine(TrendLineChart),
    Empty { title: String },
}

/// First day of the calendar period containing `t`.
pub fn period_start(t: NaiveDateTime, granularity: Granularity) -> NaiveDate {
    let d = t.date();
    match granularity {
        Granularity::Year => NaiveDate::from_ymd_opt(d.year(), 1, 1).expect("January 1 exists"),
        Granularity::Quarter => {
            let month = ((d.month0() / 3) * 3) + 1;
            NaiveDate::from_ymd_opt(d.year(), month, 1).expect("quarter start exists")
        }
        Granularity::Month => {
            NaiveDate::from_ymd_opt(d.year(), d.month(), 1).expect("month start exists")
        }
        Granularity::Week => {
            // ISO week, starting Monday.
            d - Duration::days(d.weekday().num_days_from_monday() as i64)
        }
        Granularity::Day => d,
    }
}
