//! Built-in synthetic sample dataset.
//!
//! A small YouTube-like table so every feature can be exercised without an
//! upload: weekly publish dates, a steadily growing subscriber count, four
//! rotating categories, and thirty channel names.

use chrono::{Duration, NaiveDate};

use super::source::DataTable;

const SAMPLE_ROWS: usize = 300;
const SAMPLE_CATEGORIES: [&str; 4] = ["Tech", "Music", "Education", "Comedy"];

/// Generate the built-in sample dataset.
pub fn sample_table() -> DataTable {
    let headers = vec![
        "published_at".to_string(),
        "subscriber_count".to_string(),
        "video_category".to_string(),
        "channel_name".to_string(),
    ];

    let start = NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid sample start date");
    let rows = (0..SAMPLE_ROWS)
        .map(|i| {
            let date = start + Duration::days(7 * i as i64);
            let subscribers = ((i as f64).powf(1.05) * 120.0 + 5000.0) as i64;
            vec![
                date.format("%Y-%m-%d").to_string(),
                subscribers.to_string(),
                SAMPLE_CATEGORIES[i % SAMPLE_CATEGORIES.len()].to_string(),
                format!("Channel {}", i % 30),
            ]
        })
        .collect();

    DataTable::new(headers, rows, b',')
}
