//! Duration formatting for cards, detail pages and the player

/// `"1h 30min"` / `"45min"` from a number of minutes
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}min", hours, mins)
    } else {
        format!("{}min", mins)
    }
}

/// Same shape as [`format_minutes`], from seconds (remainder seconds dropped)
pub fn format_seconds_hm(seconds: u32) -> String {
    format_minutes(seconds / 60)
}

/// Player clock: `"1:02:03"` with hours, `"2:03"` without
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let mins = (total / 60) % 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
