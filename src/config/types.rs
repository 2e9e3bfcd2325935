//! Configuration types for company calendars.
//!
//! These structs mirror the on-disk YAML schema. They are plain serde
//! carriers; validation against the engine's invariants happens in
//! [`CalendarLoader`](super::CalendarLoader).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PeriodType;

/// One holiday rule entry as it appears in a calendar file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// Display label for the holiday.
    pub description: String,
    /// The date rule text (fixed-date or ordinal-weekday form).
    pub config: String,
}

/// A company's payroll calendar configuration.
///
/// Describes the schedule type, the current pay period boundaries, and the
/// company's holiday rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCalendar {
    /// The owning company id.
    pub company_id: u32,
    /// The payroll schedule type.
    pub period_type: PeriodType,
    /// First day of the current pay period (inclusive).
    pub period_begin: NaiveDate,
    /// Last day of the current pay period (inclusive).
    pub period_end: NaiveDate,
    /// The company's holiday rules.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}
