//! Relative time labels for the conversation list.

const SECOND: u64 = 1000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Format `timestamp` (Unix ms) relative to `now` (Unix ms).
///
/// Returns strings like "a few seconds ago", "5 minutes ago", "an hour ago",
/// "3 days ago", "a year ago". Timestamps in the future read "in ...".
/// Any pair of `i64` values is accepted; distances past `i64` range saturate.
pub fn relative_time(timestamp: i64, now: i64) -> String {
    let diff = now.saturating_sub(timestamp);
    let phrase = duration_phrase(diff.unsigned_abs());

    if diff < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn duration_phrase(ms: u64) -> String {
    let rounded = |unit: u64| ms.saturating_add(unit / 2) / unit;

    if ms < 45 * SECOND {
        "a few seconds".to_string()
    } else if ms < 90 * SECOND {
        "a minute".to_string()
    } else if ms < 45 * MINUTE {
        format!("{} minutes", rounded(MINUTE))
    } else if ms < 90 * MINUTE {
        "an hour".to_string()
    } else if ms < 22 * HOUR {
        format!("{} hours", rounded(HOUR))
    } else if ms < 36 * HOUR {
        "a day".to_string()
    } else if ms < 26 * DAY {
        format!("{} days", rounded(DAY))
    } else if ms < 45 * DAY {
        "a month".to_string()
    } else if ms < 320 * DAY {
        format!("{} months", rounded(MONTH))
    } else if ms < 548 * DAY {
        "a year".to_string()
    } else {
        format!("{} years", rounded(YEAR))
    }
}
