use chrono::{DateTime, Local, TimeZone, Utc};

/// Display format for capture timestamps.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a capture timestamp in the viewer's local time zone.
pub fn format_local(ts: &DateTime<Utc>) -> String {
    format_in(ts, &Local)
}

/// Format a capture timestamp in an arbitrary zone.
/// Shows milliseconds when the timestamp has a sub-second component.
pub fn format_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = ts.with_timezone(tz);
    if ts.timestamp_subsec_millis() == 0 {
        local.format(DISPLAY_FORMAT).to_string()
    } else {
        local.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }
}
