//! Heuristic role guessing from column names.

use super::Roles;

/// Keyword lists per role, in priority order. Earlier keywords win even when a
/// later keyword would match an earlier column.
const TIME_KEYWORDS: &[&str] = &["date", "time", "timestamp", "published", "created", "start"];
const METRIC_KEYWORDS: &[&str] = &[
    "subscriber",
    "subs",
    "value",
    "amount",
    "revenue",
    "score",
    "count",
    "metric",
];
const CATEGORY_KEYWORDS: &[&str] = &["category", "segment", "type", "dept", "major", "region"];
const ID_KEYWORDS: &[&str] = &[
    "id", "name", "channel", "user", "order", "patient", "student", "store",
];

/// Guess a role mapping from column names.
///
/// For each role the keywords are tried in order; the first keyword that is a
/// case-insensitive substring of any column name fixes that role to the first
/// such column. Roles with no match stay unmapped.
pub fn guess_roles(columns: &[String]) -> Roles {
    Roles {
        time: first_match(columns, TIME_KEYWORDS),
        metric: first_match(columns, METRIC_KEYWORDS),
        category: first_match(columns, CATEGORY_KEYWORDS),
        id: first_match(columns, ID_KEYWORDS),
    }
}

fn first_match(columns: &[String], keywords: &[&str]) -> Option<String> {
    let lowered: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();
    for keyword in keywords {
        for (column, lower) in columns.iter().zip(&lowered) {
            if lower.contains(keyword) {
                return Some(column.clone());
            }
        }
    }
    None
}
