use chrono::{DateTime, Utc};

/// Convert a `Date.now()` reading to a UTC timestamp.
pub fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis as i64)
}

/// Short "how long ago" label for a comment.
///
/// Under a week the label is relative ("5m ago", "3h ago", "2d ago"); older
/// comments show the calendar date ("Oct 4, 2026"). Timestamps in the future
/// (clock skew) count as "Just now".
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        created_at.format("%b %-d, %Y").to_string()
    }
}
