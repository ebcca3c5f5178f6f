/// Utilities for date formatting
///
/// Wizard dates are `chrono::NaiveDate`; `<input type="date">` speaks `YYYY-MM-DD`.
use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Format date for summaries: DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format date for pickers: "March 15, 2024"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_optional(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "Not set".to_string())
}

/// Value for the `value` attribute of a date input; empty when unset.
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse the value of a date input. Empty or malformed input yields `None`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 3, 15)), "15.03.2024");
        assert_eq!(format_long(d(2024, 3, 5)), "March 5, 2024");
        assert_eq!(format_optional(None), "Not set");
    }

    #[test]
    fn test_input_values() {
        assert_eq!(to_input_value(Some(d(2024, 12, 31))), "2024-12-31");
        assert_eq!(to_input_value(None), "");
        assert_eq!(parse_input_date("2024-12-31"), Some(d(2024, 12, 31)));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("31.12.2024"), None);
    }
}
