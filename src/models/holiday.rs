//! Holiday model.
//!
//! This module contains the [`Holiday`] type: a named holiday rule owned by
//! a company. A holiday carries no intrinsic date; its date for a given year
//! is always derived on demand via
//! [`resolve_holiday`](crate::calculation::resolve_holiday).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Raw mirror of [`Holiday`] used to validate deserialized rows.
#[derive(Debug, Deserialize)]
struct HolidayRow {
    company_id: u32,
    description: String,
    config: String,
}

/// Represents one named holiday rule owned by a company.
///
/// The `config` string encodes the date rule in one of two text forms:
/// a fixed date ("July 4th Observance") or an ordinal weekday
/// ("3rd Monday in February"). It is stored exactly as given and never
/// normalized; parsing happens at resolution time. Two holidays with
/// identical configs always resolve to the same date for the same year.
///
/// # Example
///
/// ```
/// use payroll_calendar::models::Holiday;
///
/// let holiday = Holiday::new(42, "Memorial Day", "Last Monday in May").unwrap();
/// assert_eq!(holiday.description(), "Memorial Day");
/// assert_eq!(holiday.config(), "Last Monday in May");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HolidayRow")]
pub struct Holiday {
    company_id: u32,
    description: String,
    config: String,
}

impl TryFrom<HolidayRow> for Holiday {
    type Error = EngineError;

    fn try_from(row: HolidayRow) -> EngineResult<Self> {
        Holiday::new(row.company_id, row.description, row.config)
    }
}

impl Holiday {
    /// Creates a new holiday rule.
    ///
    /// The config string is accepted as-is, even if it would not parse; an
    /// invalid rule surfaces when the holiday is resolved for a year.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHoliday`] if the description is blank.
    pub fn new(
        company_id: u32,
        description: impl Into<String>,
        config: impl Into<String>,
    ) -> EngineResult<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(EngineError::InvalidHoliday {
                message: "description must not be blank".to_string(),
            });
        }

        Ok(Self {
            company_id,
            description,
            config: config.into(),
        })
    }

    /// Returns the owning company id.
    pub fn company_id(&self) -> u32 {
        self.company_id
    }

    /// Returns the display label for this holiday.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the date rule text, exactly as stored.
    pub fn config(&self) -> &str {
        &self.config
    }
}
