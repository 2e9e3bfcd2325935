//! Pay period model.
//!
//! This module contains the [`PayPeriod`] and [`PeriodType`] types that
//! represent one payroll cycle for one company.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the schedule type of a pay period.
///
/// The type determines the span of each period and how the engine derives
/// the adjacent periods during schedule rollover.
///
/// # Example
///
/// ```
/// use payroll_calendar::models::PeriodType;
///
/// let period_type = PeriodType::SemiMonthly;
/// assert_eq!(period_type.to_string(), "SemiMonthly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    /// A fixed 7-day cycle.
    Weekly,
    /// A fixed 14-day cycle.
    BiWeekly,
    /// Two alternating half-month cycles anchored at arbitrary days of month.
    SemiMonthly,
    /// A full calendar-month cycle, preserving the begin day-of-month.
    Monthly,
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodType::Weekly => write!(f, "Weekly"),
            PeriodType::BiWeekly => write!(f, "BiWeekly"),
            PeriodType::SemiMonthly => write!(f, "SemiMonthly"),
            PeriodType::Monthly => write!(f, "Monthly"),
        }
    }
}

/// Raw mirror of [`PayPeriod`] used to validate deserialized rows.
#[derive(Debug, Deserialize)]
struct PayPeriodRow {
    company_id: u32,
    period_type: PeriodType,
    begin: NaiveDate,
    end: NaiveDate,
}

/// Represents one payroll cycle for one company.
///
/// A `PayPeriod` is an immutable value with day resolution: the begin and end
/// dates are both inclusive, and any time-of-day component on a query input
/// is truncated before comparison. Rollover operations
/// ([`next_period`](crate::calculation::next_period) and
/// [`previous_period`](crate::calculation::previous_period)) return new
/// values rather than mutating an existing one.
///
/// # Example
///
/// ```
/// use payroll_calendar::models::{PayPeriod, PeriodType};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     42,
///     PeriodType::Weekly,
///     NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 1, 7).unwrap(),
/// )
/// .unwrap();
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2014, 1, 4).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2014, 1, 8).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PayPeriodRow")]
pub struct PayPeriod {
    company_id: u32,
    period_type: PeriodType,
    begin: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PayPeriodRow> for PayPeriod {
    type Error = EngineError;

    fn try_from(row: PayPeriodRow) -> EngineResult<Self> {
        PayPeriod::new(row.company_id, row.period_type, row.begin, row.end)
    }
}

impl PayPeriod {
    /// Creates a new pay period, validating its span invariants.
    ///
    /// # Arguments
    ///
    /// * `company_id` - The owning company.
    /// * `period_type` - The schedule type.
    /// * `begin` - The first day of the period (inclusive).
    /// * `end` - The last day of the period (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayPeriod`] if `begin > end`, or if the
    /// span does not match the schedule type (7 days for [`PeriodType::Weekly`],
    /// 14 days for [`PeriodType::BiWeekly`]). Semi-monthly and monthly spans
    /// vary with the anchor day and the target month, so no fixed day count
    /// applies to them; a semi-monthly half must still span strictly less
    /// than one calendar month, since no `(D1, D3)` anchor pair produces a
    /// longer phase and rollover arithmetic relies on it.
    pub fn new(
        company_id: u32,
        period_type: PeriodType,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Self> {
        if begin > end {
            return Err(EngineError::InvalidPayPeriod {
                message: format!("begin {} is after end {}", begin, end),
            });
        }

        let span_days = (end - begin).num_days();
        match period_type {
            PeriodType::Weekly | PeriodType::BiWeekly => {
                let expected = if period_type == PeriodType::Weekly { 6 } else { 13 };
                if span_days != expected {
                    return Err(EngineError::InvalidPayPeriod {
                        message: format!(
                            "{} period [{}, {}] spans {} days, expected {}",
                            period_type,
                            begin,
                            end,
                            span_days + 1,
                            expected + 1
                        ),
                    });
                }
            }
            PeriodType::SemiMonthly => {
                // The next period ends at begin + 1 month - 1 day, so a half
                // reaching that date would roll over into an inverted
                // period.
                let limit = begin
                    .checked_add_months(Months::new(1))
                    .expect("date within chrono range")
                    - Duration::days(1);
                if end >= limit {
                    return Err(EngineError::InvalidPayPeriod {
                        message: format!(
                            "{} period [{}, {}] spans a full month or more",
                            period_type, begin, end
                        ),
                    });
                }
            }
            PeriodType::Monthly => {}
        }

        Ok(Self {
            company_id,
            period_type,
            begin,
            end,
        })
    }

    /// Builds a period from parts already known to satisfy the invariants.
    ///
    /// Rollover arithmetic produces spans that hold by construction, so it
    /// skips revalidation.
    pub(crate) fn from_parts(
        company_id: u32,
        period_type: PeriodType,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            company_id,
            period_type,
            begin,
            end,
        }
    }

    /// Returns the owning company id.
    pub fn company_id(&self) -> u32 {
        self.company_id
    }

    /// Returns the schedule type.
    pub fn period_type(&self) -> PeriodType {
        self.period_type
    }

    /// Returns the first day of the period (inclusive).
    pub fn begin(&self) -> NaiveDate {
        self.begin
    }

    /// Returns the last day of the period (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both begin and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_calendar::models::{PayPeriod, PeriodType};
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::new(
    ///     1,
    ///     PeriodType::Weekly,
    ///     NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2014, 1, 7).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2014, 1, 1).unwrap())); // begin
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2014, 1, 7).unwrap())); // end
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2013, 12, 31).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.begin && date <= self.end
    }

    /// Checks if a given datetime falls within this pay period.
    ///
    /// The time-of-day component is truncated before the comparison: a
    /// timestamp one second before midnight belongs to the day it is in.
    pub fn contains_datetime(&self, datetime: NaiveDateTime) -> bool {
        self.contains_date(datetime.date())
    }

    /// Returns true if the entire period lies strictly before the given day.
    pub fn is_before(&self, date: NaiveDate) -> bool {
        self.end < date
    }

    /// Returns true if the entire period lies strictly after the given day.
    pub fn is_after(&self, date: NaiveDate) -> bool {
        self.begin > date
    }
}
