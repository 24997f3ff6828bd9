#[cfg(test)]
mod tests {
    use callsight::libs::normalizer::{normalize_date, parse_date, parse_hour};
    use chrono::NaiveDate;
    use serde_json::json;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_date_brazilian_format() {
        assert_eq!(parse_date("15/03/2025"), Some(date(2025, 3, 15)));
        assert_eq!(parse_date("1/3/2025"), Some(date(2025, 3, 1)));
    }

    #[test]
    fn test_parse_date_iso_format() {
        assert_eq!(parse_date("2025-03-15"), Some(date(2025, 3, 15)));
        // Time suffixes are cut off; only the calendar day is read.
        assert_eq!(parse_date("2025-03-15T14:30:00"), Some(date(2025, 3, 15)));
        assert_eq!(parse_date("2025-03-15 14:30:00"), Some(date(2025, 3, 15)));
    }

    #[test]
    fn test_parse_date_preserves_calendar_day() {
        // No timezone arithmetic: the day in the text is the day in the result.
        let parsed = parse_date("2025-12-31T23:59:59").unwrap();
        assert_eq!(parsed, date(2025, 12, 31));
    }

    #[test]
    fn test_parse_date_invalid_input() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("32/13/2025"), None);
        assert_eq!(parse_date("2025-13-45"), None);
    }

    #[test]
    fn test_normalize_date_from_json_string() {
        assert_eq!(normalize_date(&json!("15/03/2025")), Some(date(2025, 3, 15)));
        assert_eq!(normalize_date(&json!("2025-03-15")), Some(date(2025, 3, 15)));
    }

    #[test]
    fn test_normalize_date_from_epoch_millis() {
        // 2025-03-15T12:00:00Z = 1742040000000 ms
        assert_eq!(normalize_date(&json!(1742040000000i64)), Some(date(2025, 3, 15)));
    }

    #[test]
    fn test_normalize_date_from_unsupported_value() {
        assert_eq!(normalize_date(&json!(null)), None);
        assert_eq!(normalize_date(&json!(true)), None);
        assert_eq!(normalize_date(&json!([1, 2])), None);
    }

    #[test]
    fn test_parse_hour() {
        assert_eq!(parse_hour("09:15:00"), Some(9));
        assert_eq!(parse_hour("23:59:59"), Some(23));
        assert_eq!(parse_hour("0:05:00"), Some(0));
    }

    #[test]
    fn test_parse_hour_invalid() {
        assert_eq!(parse_hour(""), None);
        assert_eq!(parse_hour("24:00:00"), None);
        assert_eq!(parse_hour("abc"), None);
    }
}
