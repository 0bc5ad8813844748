/// Utilities for date and time formatting
///
/// Timestamps coming from the API are RFC 3339; the dashboard shows them
/// the way the id-ID locale does.
use chrono::{DateTime, Local, Utc};

/// id-ID display format, e.g. "15/03/2024 14.02.26"
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H.%M.%S";

/// Format a UTC timestamp as "DD/MM/YYYY HH.MM.SS" in the browser's local time zone
pub fn format_local_datetime_id(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_format_local_datetime_id_shape() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        let formatted = format_local_datetime_id(&dt);

        assert_eq!(formatted.len(), 19);
        let chars: Vec<char> = formatted.chars().collect();
        assert_eq!((chars[2], chars[5], chars[10], chars[13], chars[16]), ('/', '/', ' ', '.', '.'));
    }

    #[test]
    fn test_format_local_datetime_id_is_local_wall_clock() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let parsed = NaiveDateTime::parse_from_str(&format_local_datetime_id(&dt), DISPLAY_FORMAT)
            .unwrap();
        assert_eq!(parsed, dt.with_timezone(&Local).naive_local());
    }
}
