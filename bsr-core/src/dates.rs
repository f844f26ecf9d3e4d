//! Date parsing and formatting helpers shared across the BSR crates.

use chrono::NaiveDate;

/// Date format used in the rental CSV tables: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_and_parse() {
        let date = NaiveDate::from_ymd_opt(2012, 6, 15).unwrap();
        let formatted = format_date(&date);
        assert_eq!(formatted, "2012-06-15");
        let parsed = parse_date(&formatted).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("15/06/2012").is_err());
        assert!(parse_date("2012-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
