//! Pay period rollover logic.
//!
//! This module derives the adjacent (previous/next) pay period for each of
//! the four schedule types. Rollover is pure and total: it never fails for a
//! valid period, and always produces a period immediately adjacent to its
//! input with no gap or overlap.

use chrono::Duration;

use crate::models::{PayPeriod, PeriodType};

use super::date_math::{add_month, sub_month};

/// Computes the pay period immediately following the given one.
///
/// The result has the same company and schedule type. Its begin date is
/// always `period.end() + 1 day`.
///
/// # Behavior by type
///
/// - Weekly / bi-weekly: both boundaries shift forward by 7 / 14 days.
/// - Monthly: both boundaries shift forward by one calendar month,
///   preserving the day-of-month (clamped at shorter months).
/// - Semi-monthly: the two halves of the month-pair lattice alternate. With
///   anchor days `D1 = day(begin)` and `D3 = day(end) + 1` (wrapping past the
///   last day of the month), the first-half period of month M is followed by
///   the second-half period of month M, which is followed by the first-half
///   period of month M+1. Both cases reduce to
///   `[end + 1 day, begin + 1 month - 1 day]`.
///
/// Day-of-month anchors above 28 are subject to chrono's month-arithmetic
/// clamping and may not round-trip exactly through short months.
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::next_period;
/// use payroll_calendar::models::{PayPeriod, PeriodType};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     42,
///     PeriodType::SemiMonthly,
///     NaiveDate::from_ymd_opt(2014, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 1, 25).unwrap(),
/// )
/// .unwrap();
///
/// let next = next_period(&period);
/// assert_eq!(next.begin(), NaiveDate::from_ymd_opt(2014, 1, 26).unwrap());
/// assert_eq!(next.end(), NaiveDate::from_ymd_opt(2014, 2, 9).unwrap());
/// ```
pub fn next_period(period: &PayPeriod) -> PayPeriod {
    let (begin, end) = match period.period_type() {
        PeriodType::Weekly => (
            period.begin() + Duration::days(7),
            period.end() + Duration::days(7),
        ),
        PeriodType::BiWeekly => (
            period.begin() + Duration::days(14),
            period.end() + Duration::days(14),
        ),
        PeriodType::Monthly => (add_month(period.begin()), add_month(period.end())),
        PeriodType::SemiMonthly => (
            period.end() + Duration::days(1),
            add_month(period.begin()) - Duration::days(1),
        ),
    };

    PayPeriod::from_parts(period.company_id(), period.period_type(), begin, end)
}

/// Computes the pay period immediately preceding the given one.
///
/// Exact inverse of [`next_period`] (for day-of-month anchors of 28 or
/// below). The result's end date is always `period.begin() - 1 day`.
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::previous_period;
/// use payroll_calendar::models::{PayPeriod, PeriodType};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     42,
///     PeriodType::SemiMonthly,
///     NaiveDate::from_ymd_opt(2014, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 1, 25).unwrap(),
/// )
/// .unwrap();
///
/// let previous = previous_period(&period);
/// assert_eq!(previous.begin(), NaiveDate::from_ymd_opt(2013, 12, 26).unwrap());
/// assert_eq!(previous.end(), NaiveDate::from_ymd_opt(2014, 1, 9).unwrap());
/// ```
pub fn previous_period(period: &PayPeriod) -> PayPeriod {
    let (begin, end) = match period.period_type() {
        PeriodType::Weekly => (
            period.begin() - Duration::days(7),
            period.end() - Duration::days(7),
        ),
        PeriodType::BiWeekly => (
            period.begin() - Duration::days(14),
            period.end() - Duration::days(14),
        ),
        PeriodType::Monthly => (sub_month(period.begin()), sub_month(period.end())),
        PeriodType::SemiMonthly => (
            sub_month(period.end() + Duration::days(1)),
            period.begin() - Duration::days(1),
        ),
    };

    PayPeriod::from_parts(period.company_id(), period.period_type(), begin, end)
}
