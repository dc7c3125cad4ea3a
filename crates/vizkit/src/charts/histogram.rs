//! Histogram of the metric distribution.

use serde::Serialize;

use crate::config::ViewOptions;
use crate::pipeline::StandardFrame;

/// A single histogram bin. `right` is exclusive except for the last bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
}

/// Equal-width histogram of the non-missing metric values.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramChart {
    pub title: String,
    pub bins: Vec<HistogramBin>,
    /// Number of values binned (missing metrics excluded).
    pub sample_count: usize,
    /// Log-scale toggles for the renderer; binning is unaffected.
    pub log_x: bool,
    pub log_y: bool,
}

/// Bin the non-missing metric values into `opts.bins` equal-width bins.
///
/// All-equal values collapse into a single bin; a frame with no usable metric
/// yields an empty bin list rather than an error.
pub fn histogram(frame: &StandardFrame, opts: &ViewOptions) -> HistogramChart {
    let mut values = frame.metric_values();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    HistogramChart {
        title: "Distribution of Metric".to_string(),
        bins: build_bins(&values, opts.bins.max(1)),
        sample_count: values.len(),
        log_x: opts.log_x,
        log_y: opts.log_y,
    }
}

fn build_bins(sorted: &[f64], num_bins: usize) -> Vec<HistogramBin> {
    if sorted.is_empty() {
        return Vec::new();
    }

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            left: min,
            right: max,
            count: sorted.len(),
        }];
    }

    let width = (max - min) / num_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..num_bins)
        .map(|i| HistogramBin {
            left: min + i as f64 * width,
            // Last bin closes on max so it is included.
            right: if i == num_bins - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    let mut current = 0;
    for &value in sorted {
        while current < num_bins - 1 && value >= bins[current].right {
            current += 1;
        }
        bins[current].count += 1;
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DataTable;
    use crate::pipeline::standardize;
    use crate::roles::Roles;

    fn metric_frame(values: &[&str]) -> StandardFrame {
        let table = DataTable::new(
            vec!["value".to_string()],
            values.iter().map(|v| vec![v.to_string()]).collect(),
            b',',
        );
        standardize(&table, &Roles::metric_only("value")).unwrap()
    }

    #[test]
    fn test_bins_cover_all_values() {
        let frame = metric_frame(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        let chart = histogram(&frame, &ViewOptions { bins: 5, ..ViewOptions::default() });

        assert_eq!(chart.bins.len(), 5);
        assert_eq!(chart.bins.iter().map(|b| b.count).sum::<usize>(), 10);
        assert_eq!(chart.sample_count, 10);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let frame = metric_frame(&["0", "10"]);
        let chart = histogram(&frame, &ViewOptions { bins: 4, ..ViewOptions::default() });
        assert_eq!(chart.bins.last().unwrap().count, 1);
    }

    #[test]
    fn test_constant_values_single_bin() {
        let frame = metric_frame(&["7", "7", "7"]);
        let chart = histogram(&frame, &ViewOptions::default());
        assert_eq!(chart.bins.len(), 1);
        assert_eq!(chart.bins[0].count, 3);
    }

    #[test]
    fn test_missing_values_excluded() {
        let frame = metric_frame(&["1", "x", "3"]);
        let chart = histogram(&frame, &ViewOptions::default());
        assert_eq!(chart.sample_count, 2);
    }

    #[test]
    fn test_log_flags_carried_not_applied() {
        let frame = metric_frame(&["1", "2", "3"]);
        let plain = histogram(&frame, &ViewOptions::default());
        let logged = histogram(
            &frame,
            &ViewOptions { log_x: true, log_y: true, ..ViewOptions::default() },
        );

        assert!(logged.log_x && logged.log_y);
        assert_eq!(plain.bins, logged.bins);
    }
}
