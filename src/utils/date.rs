// Target-date literal parsing
//
// Dates carry no time component; tasks only care about the calendar day.

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse a target date literal and return the calendar date
///
/// Accepts the compact eight-digit form (20220522) and the dashed form
/// (2022-05-22). Malformed text is an error for the caller to handle;
/// this is the only fallible operation in the crate.
pub fn parse_compact_date(expr: &str) -> Result<NaiveDate> {
    // Compact form: 20220522
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y%m%d") {
        return Ok(date);
    }

    // Dashed form: 2022-05-22
    NaiveDate::parse_from_str(expr, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: '{}'. Expected YYYYMMDD or YYYY-MM-DD.", expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_form() {
        let date = parse_compact_date("20220522").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 5, 22).unwrap());
    }

    #[test]
    fn test_parse_dashed_form() {
        let date = parse_compact_date("2022-05-22").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 5, 22).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_compact_date("").is_err());
        assert!(parse_compact_date("not a date").is_err());
        // Calendar-invalid month and day
        assert!(parse_compact_date("20221301").is_err());
        assert!(parse_compact_date("20220230").is_err());
    }

    #[test]
    fn test_roundtrip_rendering() {
        let date = parse_compact_date("20220410").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2022-04-10");
    }
}
