//! Shared calendar arithmetic and English name tables.
//!
//! Small helpers used by both the rollover and holiday-resolution logic.

use chrono::{Months, NaiveDate, Weekday};

/// Returns the last calendar day of the given month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first-of-month date");
    first
        .checked_add_months(Months::new(1))
        .expect("date within chrono range")
        .pred_opt()
        .expect("date within chrono range")
}

/// Adds one calendar month, clamping the day at shorter months.
pub(crate) fn add_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1))
        .expect("date within chrono range")
}

/// Subtracts one calendar month, clamping the day at shorter months.
pub(crate) fn sub_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1))
        .expect("date within chrono range")
}

/// Parses an English month name, full or 3-letter, already lowercased.
pub(crate) fn parse_month_name(token: &str) -> Option<u32> {
    match token {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sep" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

/// Parses an English weekday name, full or 3-letter, already lowercased.
pub(crate) fn parse_weekday_name(token: &str) -> Option<Weekday> {
    match token {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Strips an ordinal suffix ("st", "nd", "rd", "th") from a day or ordinal
/// token, returning the bare digits. Tokens without a suffix pass through.
pub(crate) fn strip_ordinal_suffix(token: &str) -> &str {
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(digits) = token.strip_suffix(suffix) {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return digits;
            }
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2014, 1), date(2014, 1, 31));
        assert_eq!(last_day_of_month(2014, 4), date(2014, 4, 30));
        assert_eq!(last_day_of_month(2014, 12), date(2014, 12, 31));
    }

    #[test]
    fn test_last_day_of_february_leap_years() {
        assert_eq!(last_day_of_month(2013, 2), date(2013, 2, 28));
        assert_eq!(last_day_of_month(2016, 2), date(2016, 2, 29));
        assert_eq!(last_day_of_month(1900, 2), date(1900, 2, 28));
        assert_eq!(last_day_of_month(2000, 2), date(2000, 2, 29));
    }

    #[test]
    fn test_add_month_clamps_short_months() {
        assert_eq!(add_month(date(2014, 1, 15)), date(2014, 2, 15));
        assert_eq!(add_month(date(2014, 1, 31)), date(2014, 2, 28));
        assert_eq!(add_month(date(2014, 12, 10)), date(2015, 1, 10));
    }

    #[test]
    fn test_sub_month_clamps_short_months() {
        assert_eq!(sub_month(date(2014, 2, 15)), date(2014, 1, 15));
        assert_eq!(sub_month(date(2014, 3, 31)), date(2014, 2, 28));
        assert_eq!(sub_month(date(2014, 1, 10)), date(2013, 12, 10));
    }

    #[test]
    fn test_parse_month_name_full_and_short() {
        assert_eq!(parse_month_name("july"), Some(7));
        assert_eq!(parse_month_name("jul"), Some(7));
        assert_eq!(parse_month_name("may"), Some(5));
        assert_eq!(parse_month_name("septembre"), None);
        assert_eq!(parse_month_name(""), None);
    }

    #[test]
    fn test_parse_weekday_name_full_and_short() {
        assert_eq!(parse_weekday_name("monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday_name("thu"), Some(Weekday::Thu));
        assert_eq!(parse_weekday_name("sonntag"), None);
    }

    #[test]
    fn test_strip_ordinal_suffix() {
        assert_eq!(strip_ordinal_suffix("1st"), "1");
        assert_eq!(strip_ordinal_suffix("2nd"), "2");
        assert_eq!(strip_ordinal_suffix("3rd"), "3");
        assert_eq!(strip_ordinal_suffix("25th"), "25");
        assert_eq!(strip_ordinal_suffix("4"), "4");
        // A bare suffix has no digits to expose.
        assert_eq!(strip_ordinal_suffix("th"), "th");
        assert_eq!(strip_ordinal_suffix("last"), "last");
    }
}
