//! Category mix: metric share (or row counts) per category.

use indexmap::IndexMap;
use serde::Serialize;

use super::Chart;
use crate::config::{Aggregate, ViewOptions};
use crate::pipeline::StandardFrame;

/// One aggregated category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub label: String,
    pub value: f64,
}

/// Aggregated category breakdown, sorted by descending value.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMixChart {
    pub title: String,
    /// Render as a bar chart instead of a pie.
    pub as_bar: bool,
    pub slices: Vec<CategorySlice>,
}

/// Build the category mix chart.
///
/// Prefers the bucketed category column when present, else the raw one; with
/// neither, an explanatory empty chart is returned. Sum/mean aggregation
/// falls back to row counts when the metric has no usable value.
pub fn category_mix(frame: &StandardFrame, opts: &ViewOptions) -> Chart {
    let Some(labels) = frame.category_labels() else {
        return Chart::Empty {
            title: "No category mapped".to_string(),
        };
    };

    let aggregate = if frame.has_metric_values() {
        opts.aggregate
    } else {
        Aggregate::Count
    };

    let mut slices = aggregate_slices(labels, &frame.metric, aggregate);
    slices.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));

    let title = match aggregate {
        Aggregate::Count => "Category Mix (row counts)".to_string(),
        agg => format!("Category Mix ({})", agg.label()),
    };

    Chart::CategoryMix(CategoryMixChart {
        title,
        as_bar: opts.category_as_bar,
        slices,
    })
}

/// Aggregate per label in first-seen order.
fn aggregate_slices(
    labels: &[String],
    metric: &[Option<f64>],
    aggregate: Aggregate,
) -> Vec<CategorySlice> {
    // (sum of non-missing metrics, non-missing count, row count) per label
    let mut acc: IndexMap<&str, (f64, usize, usize)> = IndexMap::new();
    for (label, m) in labels.iter().zip(metric) {
        let entry = acc.entry(label.as_str()).or_insert((0.0, 0, 0));
        entry.2 += 1;
        if let Some(v) = m {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    acc.into_iter()
        .filter_map(|(label, (sum, n, rows))| {
            let value = match aggregate {
                Aggregate::Sum => sum,
                Aggregate::Count => rows as f64,
                // A category with only missing metrics has no mean.
                Aggregate::Mean if n == 0 => return None,
                Aggregate::Mean => sum / n as f64,
            };
            Some(CategorySlice {
                label: label.to_string(),
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DataTable;
    use crate::pipeline::{standardize, topk_bucket};
    use crate::roles::Roles;

    fn frame_from(metric: &[&str], cat: &[&str]) -> StandardFrame {
        let table = DataTable::new(
            vec!["value".to_string(), "segment".to_string()],
            metric
                .iter()
                .zip(cat)
                .map(|(m, c)| vec![m.to_string(), c.to_string()])
                .collect(),
            b',',
        );
        let roles = Roles {
            metric: Some("value".to_string()),
            category: Some("segment".to_string()),
            ..Roles::default()
        };
        standardize(&table, &roles).unwrap()
    }

    fn slices(chart: Chart) -> Vec<CategorySlice> {
        match chart {
            Chart::CategoryMix(c) => c.slices,
            other => panic!("expected category mix, got {:?}", other),
        }
    }

    #[test]
    fn test_count_mode_ignores_metric() {
        let frame = frame_from(&["100", "1", "7"], &["A", "A", "B"]);
        let chart = category_mix(
            &frame,
            &ViewOptions { aggregate: Aggregate::Count, ..ViewOptions::default() },
        );
        let slices = slices(chart);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0], CategorySlice { label: "A".to_string(), value: 2.0 });
        assert_eq!(slices[1], CategorySlice { label: "B".to_string(), value: 1.0 });
    }

    #[test]
    fn test_sum_mode_sorted_descending() {
        let frame = frame_from(&["1", "10", "2"], &["A", "B", "A"]);
        let slices = slices(category_mix(&frame, &ViewOptions::default()));

        assert_eq!(slices[0].label, "B");
        assert_eq!(slices[0].value, 10.0);
        assert_eq!(slices[1].value, 3.0);
    }

    #[test]
    fn test_mean_mode_skips_all_missing_category() {
        let frame = frame_from(&["2", "4", "x"], &["A", "A", "B"]);
        let chart = category_mix(
            &frame,
            &ViewOptions { aggregate: Aggregate::Mean, ..ViewOptions::default() },
        );
        let slices = slices(chart);

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0], CategorySlice { label: "A".to_string(), value: 3.0 });
    }

    #[test]
    fn test_unusable_metric_falls_back_to_counts() {
        let frame = frame_from(&["x", "y", "z"], &["A", "A", "B"]);
        let chart = category_mix(&frame, &ViewOptions::default());

        match chart {
            Chart::CategoryMix(c) => {
                assert_eq!(c.title, "Category Mix (row counts)");
                assert_eq!(c.slices[0].value, 2.0);
            }
            other => panic!("expected category mix, got {:?}", other),
        }
    }

    #[test]
    fn test_prefers_bucketed_column() {
        let frame = frame_from(&["1", "2", "3"], &["A", "B", "C"]);
        let bucketed = topk_bucket(&frame, 1);
        let slices = slices(category_mix(&bucketed, &ViewOptions::default()));

        // Only C (total 3) survives bucketing; A and B fold into Other.
        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert!(labels.contains(&"C"));
        assert!(labels.contains(&"Other"));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_no_category_yields_empty_chart() {
        let table = DataTable::new(
            vec!["value".to_string()],
            vec![vec!["1".to_string()]],
            b',',
        );
        let frame = standardize(&table, &Roles::metric_only("value")).unwrap();

        match category_mix(&frame, &ViewOptions::default()) {
            Chart::Empty { title } => assert_eq!(title, "No category mapped"),
            other => panic!("expected empty chart, got {:?}", other),
        }
    }
}
