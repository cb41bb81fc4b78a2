// Output formatting: terminal display of results, history, and rules.

pub mod terminal;

use chrono::{DateTime, Utc};

/// Describe how long ago `timestamp` was, relative to `now`.
///
/// Timestamps that don't parse as RFC 3339 are returned unchanged, and
/// timestamps in the future are treated as "just now".
pub fn format_relative(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };
    let seconds = (now - then.with_timezone(&Utc)).num_seconds().max(0);

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match (days, hours, minutes) {
        (0, 0, 0) => "less than a minute ago".to_string(),
        (0, 0, 1) => "1 minute ago".to_string(),
        (0, 0, m) => format!("{m} minutes ago"),
        (0, 1, _) => "about 1 hour ago".to_string(),
        (0, h, _) => format!("about {h} hours ago"),
        (1, _, _) => "1 day ago".to_string(),
        (d, _, _) => format!("{d} days ago"),
    }
}
