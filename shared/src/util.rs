//! Time slot helpers

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Wire format of reservation time slots (ISO-8601, seconds precision)
pub const TIME_SLOT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Calendar date format used by the `date` filter and export file names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const ACCEPTED_SLOT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format a time slot for the wire
pub fn format_time_slot(slot: NaiveDateTime) -> String {
    slot.format(TIME_SLOT_FORMAT).to_string()
}

/// Parse an ISO time slot (`YYYY-MM-DDTHH:MM`, optional seconds, `T` or space)
pub fn parse_time_slot(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ACCEPTED_SLOT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Parse a calendar date (`YYYY-MM-DD`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Truncate to the top of the hour (bookings are per hour)
pub fn truncate_to_hour(slot: NaiveDateTime) -> NaiveDateTime {
    slot.with_minute(0)
        .and_then(|s| s.with_second(0))
        .and_then(|s| s.with_nanosecond(0))
        .unwrap_or(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_slot_variants() {
        let expected = NaiveDate::from_ymd_opt(2030, 9, 10)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();
        assert_eq!(parse_time_slot("2030-09-10T19:00"), Some(expected));
        assert_eq!(parse_time_slot("2030-09-10T19:00:00"), Some(expected));
        assert_eq!(parse_time_slot("2030-09-10 19:00"), Some(expected));
        assert_eq!(parse_time_slot("tomorrow at seven"), None);
        assert_eq!(parse_time_slot(""), None);
    }

    #[test]
    fn test_truncate_and_format() {
        let slot = parse_time_slot("2030-09-10T19:42:17").unwrap();
        assert_eq!(format_time_slot(truncate_to_hour(slot)), "2030-09-10T19:00:00");
    }
}
