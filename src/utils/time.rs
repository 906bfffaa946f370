use chrono::{DateTime, Utc};

/// Compact relative-time label for a post timestamp: `just now` under a
/// minute, then the largest unit that fits (`5m`, `2h`, `3d`, `2w`, `4mo`,
/// `1y`). Future timestamps clamp to `just now`.
#[must_use]
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d");
    }
    if days < 30 {
        return format!("{}w", days / 7);
    }
    if days < 365 {
        return format!("{}mo", days / 30);
    }
    format!("{}y", days / 365)
}

#[must_use]
pub fn format_relative_now(then: DateTime<Utc>) -> String {
    format_relative(then, Utc::now())
}
