//! Standardization: derive canonical typed columns from a raw table.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::input::DataTable;
use crate::roles::Roles;

/// Quick gate for values worth running through the datetime formats.
static DATE_LIKE: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(),  // ISO date
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}").unwrap(), // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(),  // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(),  // Alt ISO
    ]
});

/// Datetime formats tried in order; date-only formats are midnight-extended.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// A raw table plus canonical derived columns, all row-aligned.
///
/// The raw table is carried along untouched; derived columns are copies, so
/// one source column can back several roles at once.
#[derive(Debug, Clone)]
pub struct StandardFrame {
    /// The original table, unmodified.
    pub table: DataTable,
    /// Parsed time values, present only when a time role was mapped.
    pub time: Option<Vec<Option<NaiveDateTime>>>,
    /// Parsed metric values. Always present; individual values may be missing.
    pub metric: Vec<Option<f64>>,
    /// Verbatim category text, present only when a category role was mapped.
    pub cat: Option<Vec<String>>,
    /// Verbatim id text, present only when an id role was mapped.
    pub id: Option<Vec<String>>,
    /// Top-K bucketed category labels, added by `topk_bucket`.
    pub cat_topk: Option<Vec<String>>,
}

impl StandardFrame {
    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// The non-missing metric values, in row order.
    pub fn metric_values(&self) -> Vec<f64> {
        self.metric.iter().filter_map(|v| *v).collect()
    }

    /// Whether any metric value is usable.
    pub fn has_metric_values(&self) -> bool {
        self.metric.iter().any(|v| v.is_some())
    }

    /// Category labels for grouping: bucketed if available, else raw.
    pub fn category_labels(&self) -> Option<&[String]> {
        self.cat_topk
            .as_deref()
            .or(self.cat.as_deref())
    }

    /// Produce a new frame keeping only rows where `keep` is true.
    ///
    /// Filters the raw rows and every derived column with the same mask.
    pub fn retain_rows(&self, keep: &[bool]) -> StandardFrame {
        debug_assert_eq!(keep.len(), self.row_count());

        fn filter<T: Clone>(values: &[T], keep: &[bool]) -> Vec<T> {
            values
                .iter()
                .zip(keep)
                .filter(|&(_, &k)| k)
                .map(|(v, _)| v.clone())
                .collect()
        }

        StandardFrame {
            table: DataTable::new(
                self.table.headers.clone(),
                filter(&self.table.rows, keep),
                self.table.delimiter,
            ),
            time: self.time.as_deref().map(|t| filter(t, keep)),
            metric: filter(&self.metric, keep),
            cat: self.cat.as_deref().map(|c| filter(c, keep)),
            id: self.id.as_deref().map(|i| filter(i, keep)),
            cat_topk: self.cat_topk.as_deref().map(|c| filter(c, keep)),
        }
    }
}

/// Derive the standard columns for a table under a role mapping.
///
/// Validates the roles against the table, then coerces the metric (required),
/// time (optional), category, and id columns. Unparsable individual values
/// become missing rather than errors.
pub fn standardize(table: &DataTable, roles: &Roles) -> Result<StandardFrame> {
    roles.validate(table)?;

    // validate guarantees the metric role and all named columns exist
    let metric_col = roles.metric.as_deref().expect("validated metric role");
    let metric = coerce_metric(&collect_column(table, metric_col));

    let time = roles
        .time
        .as_deref()
        .map(|name| coerce_time_any(&collect_column(table, name)));

    let cat = roles
        .category
        .as_deref()
        .map(|name| collect_column(table, name));
    let id = roles.id.as_deref().map(|name| collect_column(table, name));

    Ok(StandardFrame {
        table: table.clone(),
        time,
        metric,
        cat,
        id,
        cat_topk: None,
    })
}

fn collect_column(table: &DataTable, name: &str) -> Vec<String> {
    let index = table.column_index(name).expect("validated column name");
    table.column_values(index).map(|v| v.to_string()).collect()
}

/// Numeric coercion: null-like and unparsable cells become missing.
fn coerce_metric(values: &[String]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|v| {
            if DataTable::is_null_value(v) {
                None
            } else {
                v.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
            }
        })
        .collect()
}

/// Time coercion with a plain-year fallback.
///
/// 1. Generic datetime parsing. Kept when at least half of the non-null
///    input values parse.
/// 2. Otherwise, when at least 80% of the column is numeric, whole numbers
///    are read as years and become January 1 of that year.
/// 3. Otherwise the (mostly empty) first attempt stands.
pub fn coerce_time_any(values: &[String]) -> Vec<Option<NaiveDateTime>> {
    let attempt: Vec<Option<NaiveDateTime>> = values
        .iter()
        .map(|v| {
            if DataTable::is_null_value(v) {
                None
            } else {
                parse_datetime_any(v.trim())
            }
        })
        .collect();

    let non_null = values.iter().filter(|v| !DataTable::is_null_value(v)).count();
    let parsed = attempt.iter().filter(|v| v.is_some()).count();
    if parsed * 2 >= non_null {
        return attempt;
    }

    let numeric = values
        .iter()
        .filter(|v| !DataTable::is_null_value(v) && v.trim().parse::<f64>().is_ok())
        .count();
    if (numeric as f64) >= 0.8 * (values.len() as f64) {
        return values
            .iter()
            .map(|v| {
                if DataTable::is_null_value(v) {
                    None
                } else {
                    year_to_date(v.trim())
                }
            })
            .collect();
    }

    attempt
}

/// Parse one value against the known datetime and date formats.
fn parse_datetime_any(value: &str) -> Option<NaiveDateTime> {
    if !DATE_LIKE.iter().any(|p| p.is_match(value)) {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Read a numeric value as a year and return January 1 of that year.
fn year_to_date(value: &str) -> Option<NaiveDateTime> {
    let n: f64 = value.parse().ok()?;
    if n.fract() != 0.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(n as i32, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}
