//! # Relative Time Labels
//!
//! Human labels for "how long ago" a record was created, computed at
//! render time against the caller's clock.
//!
//! ## Design Decision
//!
//! Boundary math uses rounding, not truncation: 90 seconds reads
//! "2 mins ago", not "1 min ago". The ladder is minutes under an hour,
//! hours under a day, days under a week, then a fixed date. Locale-aware
//! date formatting is a presentation concern of the embedding view; this
//! crate emits a locale-independent `%b %-d, %Y` fallback.

use chrono::{DateTime, Utc};

/// Render a relative-time label for `then` as seen from `now`.
///
/// - under 60 rounded minutes: `"N min(s) ago"`
/// - under 24 rounded hours: `"N hour(s) ago"`
/// - under 7 rounded days: `"N day(s) ago"`
/// - otherwise: the date, e.g. `"Jan 15, 2026"`
///
/// A `then` ahead of `now` (clock skew between server and client) clamps
/// to zero minutes rather than producing a negative label.
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - then).num_milliseconds().max(0) as f64;

    let mins = (diff_ms / 60_000.0).round() as i64;
    if mins < 60 {
        return format!("{mins} min{} ago", plural(mins));
    }

    let hours = (diff_ms / 3_600_000.0).round() as i64;
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }

    let days = (diff_ms / 86_400_000.0).round() as i64;
    if days < 7 {
        return format!("{days} day{} ago", plural(days));
    }

    then.format("%b %-d, %Y").to_string()
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
