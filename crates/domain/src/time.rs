//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_checked`.
pub type Timestamp = DateTime<Utc>;

/// Format used once a timestamp is a day or more in the past.
const ABSOLUTE_FORMAT: &str = "%b %-d, %I:%M %p UTC";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Describe `ts` relative to `now` ("Just now", "5 minutes ago", "1 hour ago"),
/// falling back to an absolute short UTC date/time after 24 hours.
///
/// Timestamps in the future count as "Just now".
#[must_use]
pub fn format_relative(ts: Timestamp, now: Timestamp) -> String {
    let minutes = (now - ts).num_minutes();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} {} ago", plural(minutes, "minute"))
    } else if minutes < 24 * 60 {
        let hours = minutes / 60;
        format!("{hours} {} ago", plural(hours, "hour"))
    } else {
        ts.format(ABSOLUTE_FORMAT).to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
