use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a server timestamp in the browser's local time zone.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    format_timestamp_in(value, &Local)
}

pub fn format_timestamp_in<Tz>(value: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value
        .with_timezone(zone)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_in_requested_zone() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 10, 30, 0).unwrap();
        assert_eq!(format_timestamp_in(&ts, &Utc), "2025-01-02 10:30:00");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_timestamp_in(&ts, &tokyo), "2025-01-02 19:30:00");
    }
}
