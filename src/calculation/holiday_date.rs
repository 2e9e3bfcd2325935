//! Holiday rule resolution.
//!
//! This module turns a free-text holiday rule into a concrete calendar date
//! for a given year. Two grammar forms are supported:
//!
//! 1. Fixed date: `<Month> <Day>[st|nd|rd|th]? [Observance]` — for example
//!    "July 4th Observance". The `Observance` keyword shifts a Saturday
//!    result back to Friday and a Sunday result forward to Monday.
//! 2. Ordinal weekday: `<1st..4th|Last> <Weekday> in <Month> [<+|->N]?` —
//!    for example "3rd Monday in February" or "Last Monday in May - 1".
//!
//! Month and weekday names accept full or 3-letter English forms, matched
//! case-insensitively; runs of internal whitespace collapse to single
//! separators. Resolution is a pure parse-then-compute pipeline with no
//! state: the same `(config, year)` pair always yields the same date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

use super::date_math::{last_day_of_month, parse_month_name, parse_weekday_name,
    strip_ordinal_suffix};

/// The position of a weekday occurrence within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrdinalPosition {
    /// The Nth occurrence, with N in 1..=4.
    Nth(u32),
    /// The final occurrence, whether it is the 4th or the 5th.
    Last,
}

/// Resolves a holiday rule to the concrete date it falls on in `year`.
///
/// # Arguments
///
/// * `config` - The holiday rule text, in either grammar form.
/// * `year` - The target year; must be positive.
///
/// # Errors
///
/// - [`EngineError::InvalidHolidayYear`] if `year <= 0`, or if the year
///   lies beyond the calendar range chrono can represent.
/// - [`EngineError::EmptyHolidayConfig`] if `config` is empty or
///   whitespace-only.
/// - [`EngineError::UnparseableHolidayConfig`] if `config` matches neither
///   grammar form, or names a day that does not exist in the month.
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::resolve_holiday;
/// use chrono::NaiveDate;
///
/// // Washington's Birthday: third Monday in February.
/// let date = resolve_holiday("3rd Monday in February", 2013).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2013, 2, 18).unwrap());
///
/// // July 4th 2020 is a Saturday, observed on the Friday before.
/// let observed = resolve_holiday("July 4th Observance", 2020).unwrap();
/// assert_eq!(observed, NaiveDate::from_ymd_opt(2020, 7, 3).unwrap());
/// ```
pub fn resolve_holiday(config: &str, year: i32) -> EngineResult<NaiveDate> {
    // The Dec 31 probe also rejects years past the end of chrono's
    // calendar, so the per-month constructions below cannot fail on the
    // year alone.
    if year <= 0 || NaiveDate::from_ymd_opt(year, 12, 31).is_none() {
        return Err(EngineError::InvalidHolidayYear { year });
    }

    // split_whitespace collapses runs of spaces and tabs in one pass.
    let tokens: Vec<String> = config
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect();
    if tokens.is_empty() {
        return Err(EngineError::EmptyHolidayConfig);
    }

    // The two forms are disjoint on their first token: a month name opens a
    // fixed-date rule, an ordinal or "last" opens an ordinal-weekday rule.
    let resolved = if parse_month_name(&tokens[0]).is_some() {
        resolve_fixed_date(&tokens, year)
    } else {
        resolve_ordinal_weekday(&tokens, year)
    };

    resolved.ok_or_else(|| EngineError::UnparseableHolidayConfig {
        config: config.trim().to_string(),
    })
}

/// Computes a fixed-date rule: `<Month> <Day> [Observance]`.
fn resolve_fixed_date(tokens: &[String], year: i32) -> Option<NaiveDate> {
    if tokens.len() < 2 || tokens.len() > 3 {
        return None;
    }

    let month = parse_month_name(&tokens[0])?;
    let day: u32 = strip_ordinal_suffix(&tokens[1]).parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    match tokens.get(2).map(String::as_str) {
        None => Some(date),
        Some("observance") => Some(apply_observance(date)),
        Some(_) => None,
    }
}

/// Computes an ordinal-weekday rule:
/// `<Ordinal|Last> <Weekday> in <Month> [<+|->N]`.
fn resolve_ordinal_weekday(tokens: &[String], year: i32) -> Option<NaiveDate> {
    if tokens.len() < 4 {
        return None;
    }

    let position = parse_ordinal(&tokens[0])?;
    let weekday = parse_weekday_name(&tokens[1])?;
    if tokens[2] != "in" {
        return None;
    }
    let month = parse_month_name(&tokens[3])?;

    let base = match position {
        OrdinalPosition::Nth(n) => nth_weekday_of_month(year, month, weekday, n),
        OrdinalPosition::Last => last_weekday_of_month(year, month, weekday),
    };

    if tokens.len() == 4 {
        return Some(base);
    }

    let offset = parse_day_offset(&tokens[4..])?;
    base.checked_add_signed(Duration::days(offset))
}

/// Parses an ordinal token: "1st".."4th" (suffix optional) or "last".
fn parse_ordinal(token: &str) -> Option<OrdinalPosition> {
    if token == "last" {
        return Some(OrdinalPosition::Last);
    }
    let n: u32 = strip_ordinal_suffix(token).parse().ok()?;
    (1..=4).contains(&n).then_some(OrdinalPosition::Nth(n))
}

/// Parses the trailing signed day offset.
///
/// The sign and the digits may arrive joined ("-1") or as separate tokens
/// ("- 1"); either way the sign is mandatory.
fn parse_day_offset(tokens: &[String]) -> Option<i64> {
    let joined = tokens.concat();
    let digits = joined.strip_prefix(['+', '-'])?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    joined.parse().ok()
}

/// Returns the Nth occurrence of `weekday` in the given month.
///
/// Every month contains at least four occurrences of every weekday, so the
/// result exists for any `n` in 1..=4.
fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first-of-month date");
    let days_until = (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday())
        % 7;
    first + Duration::days(i64::from(days_until + 7 * (n - 1)))
}

/// Returns the final occurrence of `weekday` in the given month.
fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
    let last = last_day_of_month(year, month);
    let days_back = (last.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday())
        % 7;
    last - Duration::days(i64::from(days_back))
}

/// Shifts a weekend date to its observed weekday: Saturday back to Friday,
/// Sunday forward to Monday.
fn apply_observance(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Duration::days(1),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
