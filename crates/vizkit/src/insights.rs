//! Text insights: short summary bullets derived from a standardized frame.

use chrono::Datelike;
use indexmap::IndexMap;

use crate::pipeline::{StandardFrame, category_totals};
use crate::stats;

/// Produce the insight bullets for a frame.
///
/// Each bullet is independently optional; a missing precondition silently
/// omits it. Never fails.
pub fn bullets(frame: &StandardFrame) -> Vec<String> {
    let mut pts = Vec::new();

    let values = frame.metric_values();
    if !values.is_empty() {
        let mean = stats::mean(&values).unwrap_or(0.0);
        let median = stats::median(&values).unwrap_or(0.0);
        let std = stats::sample_std(&values).unwrap_or(0.0);
        pts.push(format!(
            "Count: {} | Mean: {:.2} | Median: {:.2} | Std: {:.2}",
            group_thousands(values.len()),
            mean,
            median,
            std
        ));

        let q1 = stats::quantile(&values, 0.25).unwrap_or(0.0);
        let q3 = stats::quantile(&values, 0.75).unwrap_or(0.0);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        pts.push(format!(
            "IQR: {:.2}–{:.2} | Min–Max: {:.2}–{:.2}",
            q1, q3, min, max
        ));
    }

    if let Some(totals) = category_totals(frame) {
        let mut ranked: Vec<(&String, &f64)> = totals.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        if !ranked.is_empty() {
            let top: Vec<String> = ranked
                .iter()
                .take(3)
                .map(|(name, total)| format!("{} ({:.0})", name, total))
                .collect();
            pts.push(format!("Top categories by total metric: {}", top.join(", ")));
        }
    }

    if let Some(time) = frame.time.as_deref() {
        // Metric totals per year, for rows with a parsed time.
        let mut by_year: IndexMap<i32, f64> = IndexMap::new();
        for (t, m) in time.iter().zip(&frame.metric) {
            if let Some(t) = t {
                let total = by_year.entry(t.year()).or_insert(0.0);
                if let Some(m) = m {
                    *total += m;
                }
            }
        }
        if by_year.len() >= 2 {
            by_year.sort_keys();
            let totals: Vec<f64> = by_year.values().copied().collect();
            let delta = totals[totals.len() - 1] - totals[totals.len() - 2];
            pts.push(format!("Last year vs previous year change: {:+.0}", delta));
        }
    }

    pts
}

/// Format a count with thousands separators (12345 -> "12,345").
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DataTable;
    use crate::pipeline::standardize;
    use crate::roles::Roles;

    fn frame_from(headers: Vec<&str>, rows: Vec<Vec<&str>>, roles: Roles) -> StandardFrame {
        let table = DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        );
        standardize(&table, &roles).unwrap()
    }

    #[test]
    fn test_metric_only_two_bullets() {
        let frame = frame_from(
            vec!["value"],
            vec![vec!["1"], vec!["2"], vec!["3"], vec!["4"], vec!["5"]],
            Roles::metric_only("value"),
        );
        let pts = bullets(&frame);

        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], "Count: 5 | Mean: 3.00 | Median: 3.00 | Std: 1.58");
        assert_eq!(pts[1], "IQR: 2.00–4.00 | Min–Max: 1.00–5.00");
    }

    #[test]
    fn test_all_missing_metric_yields_no_bullets() {
        let frame = frame_from(
            vec!["value"],
            vec![vec!["x"], vec!["y"]],
            Roles::metric_only("value"),
        );
        assert!(bullets(&frame).is_empty());
    }

    #[test]
    fn test_top_categories_bullet() {
        let frame = frame_from(
            vec!["value", "segment"],
            vec![
                vec!["10", "A"],
                vec!["30", "B"],
                vec!["5", "C"],
                vec!["1", "D"],
            ],
            Roles {
                metric: Some("value".to_string()),
                category: Some("segment".to_string()),
                ..Roles::default()
            },
        );
        let pts = bullets(&frame);

        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], "Top categories by total metric: B (30), A (10), C (5)");
    }

    #[test]
    fn test_year_over_year_bullet() {
        let frame = frame_from(
            vec!["when", "value"],
            vec![
                vec!["2021-03-01", "10"],
                vec!["2022-05-01", "25"],
                vec!["2022-06-01", "5"],
            ],
            Roles {
                time: Some("when".to_string()),
                metric: Some("value".to_string()),
                ..Roles::default()
            },
        );
        let pts = bullets(&frame);

        assert_eq!(pts.last().unwrap(), "Last year vs previous year change: +20");
    }

    #[test]
    fn test_single_year_omits_change_bullet() {
        let frame = frame_from(
            vec!["when", "value"],
            vec![vec!["2022-05-01", "25"], vec!["2022-06-01", "5"]],
            Roles {
                time: Some("when".to_string()),
                metric: Some("value".to_string()),
                ..Roles::default()
            },
        );
        assert_eq!(bullets(&frame).len(), 2);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(5), "5");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
