//! Holiday containment queries against pay periods.
//!
//! A holiday rule has no intrinsic date, so containment first resolves the
//! rule for the year (or years) the period touches, then tests the resolved
//! date against the period boundaries.

use chrono::Datelike;

use crate::error::EngineResult;
use crate::models::{Holiday, PayPeriod};

use super::holiday_date::resolve_holiday;

/// Checks whether a holiday falls within the given pay period.
///
/// The rule is resolved for the year of the period's begin date. A period
/// that spans a year boundary (for example a semi-monthly period running
/// December 26 through January 9) is also checked against the holiday's date
/// in the end year, so year-end holidays on either side of the boundary are
/// found.
///
/// # Errors
///
/// Propagates the holiday configuration error if the rule is empty or
/// unparseable, or as
/// [`EngineError::InvalidHolidayYear`](crate::error::EngineError) when a
/// boundary year falls outside the resolver's supported range (chrono
/// represents year zero and BCE dates, which the resolver rejects).
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::period_contains_holiday;
/// use payroll_calendar::models::{Holiday, PayPeriod, PeriodType};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     42,
///     PeriodType::SemiMonthly,
///     NaiveDate::from_ymd_opt(2013, 11, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2013, 11, 30).unwrap(),
/// )
/// .unwrap();
/// let thanksgiving = Holiday::new(42, "Thanksgiving", "4th Thursday in November").unwrap();
///
/// assert!(period_contains_holiday(&period, &thanksgiving).unwrap());
/// ```
pub fn period_contains_holiday(period: &PayPeriod, holiday: &Holiday) -> EngineResult<bool> {
    let begin_year = period.begin().year();
    let resolved = resolve_holiday(holiday.config(), begin_year)?;
    if period.contains_date(resolved) {
        return Ok(true);
    }

    let end_year = period.end().year();
    if end_year != begin_year {
        let resolved = resolve_holiday(holiday.config(), end_year)?;
        return Ok(period.contains_date(resolved));
    }

    Ok(false)
}
