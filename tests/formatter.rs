#[cfg(test)]
mod tests {
    use actilog::libs::formatter::{format_duration, format_total_duration, TIMESTAMP_FORMAT};
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "01:30");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
    }

    #[test]
    fn test_format_duration_negative_clamps_to_zero() {
        assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
    }

    #[test]
    fn test_format_total_duration_seconds_resolution() {
        assert_eq!(format_total_duration(&Duration::zero()), "0:00:00");
        assert_eq!(format_total_duration(&Duration::seconds(5)), "0:00:05");
        assert_eq!(format_total_duration(&Duration::seconds(65)), "0:01:05");
        assert_eq!(format_total_duration(&(Duration::hours(2) + Duration::minutes(3) + Duration::seconds(4))), "2:03:04");
    }

    #[test]
    fn test_format_total_duration_hours_unbounded_width() {
        assert_eq!(format_total_duration(&Duration::hours(9)), "9:00:00");
        assert_eq!(format_total_duration(&Duration::hours(26)), "26:00:00");
        assert_eq!(format_total_duration(&Duration::hours(123)), "123:00:00");
    }

    #[test]
    fn test_format_total_duration_negative_clamps_to_zero() {
        assert_eq!(format_total_duration(&Duration::seconds(-30)), "0:00:00");
    }

    #[test]
    fn test_timestamp_format_matches_store_columns() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 5, 7).unwrap();
        assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), "2025-03-10 09:05:07");
    }
}
