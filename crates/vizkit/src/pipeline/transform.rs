//! Optional frame transforms: top-K bucketing and IQR outlier trimming.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::standardize::StandardFrame;
use crate::stats;

/// The bucket label for categories outside the top K.
pub const OTHER_BUCKET: &str = "Other";

/// Default multiplier for the IQR outlier rule.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Total metric per category, accumulated in first-seen order.
///
/// Missing metrics contribute nothing; a category whose metrics are all
/// missing totals 0.0.
pub fn category_totals(frame: &StandardFrame) -> Option<IndexMap<String, f64>> {
    let cat = frame.cat.as_deref()?;
    let mut totals: IndexMap<String, f64> = IndexMap::new();
    for (label, metric) in cat.iter().zip(&frame.metric) {
        let total = totals.entry(label.clone()).or_insert(0.0);
        if let Some(m) = metric {
            *total += m;
        }
    }
    Some(totals)
}

/// Keep the top-k categories by total metric; bucket the rest as "Other".
///
/// Boundary ties resolve in favor of categories seen earlier in the data: the
/// totals are accumulated in first-seen order and ranked with a stable sort.
/// No-op if no category column is mapped.
pub fn topk_bucket(frame: &StandardFrame, k: usize) -> StandardFrame {
    let Some(totals) = category_totals(frame) else {
        return frame.clone();
    };
    let cat = frame.cat.as_deref().expect("totals imply a category column");

    let mut ranked: Vec<(&String, &f64)> = totals.iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    let keep: HashSet<&str> = ranked.iter().take(k).map(|(name, _)| name.as_str()).collect();

    let cat_topk = cat
        .iter()
        .map(|label| {
            if keep.contains(label.as_str()) {
                label.clone()
            } else {
                OTHER_BUCKET.to_string()
            }
        })
        .collect();

    StandardFrame {
        cat_topk: Some(cat_topk),
        ..frame.clone()
    }
}

/// Remove rows whose metric falls outside `[Q1 - k*IQR, Q3 + k*IQR]`.
///
/// Rows with a missing metric are never within the bound and drop too. When
/// every metric is missing the bound is unsatisfiable and no row survives.
pub fn trim_outliers_iqr(frame: &StandardFrame, k: f64) -> StandardFrame {
    let values = frame.metric_values();
    let (Some(q1), Some(q3)) = (stats::quantile(&values, 0.25), stats::quantile(&values, 0.75))
    else {
        return frame.retain_rows(&vec![false; frame.row_count()]);
    };

    let iqr = q3 - q1;
    let (lo, hi) = (q1 - k * iqr, q3 + k * iqr);
    let keep: Vec<bool> = frame
        .metric
        .iter()
        .map(|m| m.map_or(false, |v| v >= lo && v <= hi))
        .collect();

    frame.retain_rows(&keep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DataTable;
    use crate::pipeline::standardize;
    use crate::roles::Roles;

    /// Single metric/category table for transform tests.
    fn frame_from(metric: &[&str], cat: Option<&[&str]>) -> StandardFrame {
        let mut headers = vec!["value".to_string()];
        if cat.is_some() {
            headers.push("segment".to_string());
        }
        let rows = metric
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let mut row = vec![m.to_string()];
                if let Some(c) = cat {
                    row.push(c[i].to_string());
                }
                row
            })
            .collect();
        let table = DataTable::new(headers, rows, b',');
        let roles = Roles {
            metric: Some("value".to_string()),
            category: cat.map(|_| "segment".to_string()),
            ..Roles::default()
        };
        standardize(&table, &roles).unwrap()
    }

    #[test]
    fn test_topk_keeps_largest_totals() {
        let frame = frame_from(
            &["10", "20", "1", "2", "30"],
            Some(&["A", "B", "C", "C", "A"]),
        );
        let bucketed = topk_bucket(&frame, 2);
        // Totals: A=40, B=20, C=3; top 2 are A and B.
        assert_eq!(
            bucketed.cat_topk.as_deref().unwrap(),
            ["A", "B", "Other", "Other", "A"]
        );
    }

    #[test]
    fn test_topk_tie_prefers_first_seen() {
        let frame = frame_from(&["5", "5", "5"], Some(&["X", "Y", "Z"]));
        let bucketed = topk_bucket(&frame, 2);
        assert_eq!(bucketed.cat_topk.as_deref().unwrap(), ["X", "Y", "Other"]);
    }

    #[test]
    fn test_topk_distinct_bound() {
        let cats = ["A", "B", "C", "D", "E", "F"];
        let metrics = ["6", "5", "4", "3", "2", "1"];
        let frame = frame_from(&metrics, Some(&cats));
        let bucketed = topk_bucket(&frame, 3);

        let distinct: HashSet<&String> =
            bucketed.cat_topk.as_deref().unwrap().iter().collect();
        assert!(distinct.len() <= 4);
    }

    #[test]
    fn test_topk_noop_without_category() {
        let frame = frame_from(&["1", "2"], None);
        let bucketed = topk_bucket(&frame, 5);
        assert!(bucketed.cat_topk.is_none());
        assert_eq!(bucketed.row_count(), 2);
    }

    #[test]
    fn test_trim_drops_outliers_and_missing() {
        let frame = frame_from(&["1", "2", "3", "4", "5", "1000", "x"], None);
        let trimmed = trim_outliers_iqr(&frame, 1.5);
        // Q1/Q3 over [1..5, 1000]; 1000 falls outside, "x" is missing.
        assert!(trimmed.row_count() < frame.row_count());
        assert!(trimmed.metric.iter().all(|m| m.is_some()));
        assert!(!trimmed.metric.contains(&Some(1000.0)));
    }

    #[test]
    fn test_trim_idempotent_on_own_output() {
        let frame = frame_from(&["1", "2", "3", "4", "5", "6", "7", "8", "100"], None);
        let once = trim_outliers_iqr(&frame, 1.5);
        let twice = trim_outliers_iqr(&once, 1.5);
        assert_eq!(once.metric, twice.metric);
        assert_eq!(once.row_count(), twice.row_count());
    }

    #[test]
    fn test_trim_all_missing_drops_everything() {
        let frame = frame_from(&["x", "y"], None);
        let trimmed = trim_outliers_iqr(&frame, 1.5);
        assert_eq!(trimmed.row_count(), 0);
    }
}
