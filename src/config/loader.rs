//! Configuration loading functionality.
//!
//! This module provides the [`CalendarLoader`] type for loading a company's
//! payroll calendar from a YAML file.

use std::fs;
use std::path::Path;

use chrono::Datelike;
use tracing::{debug, info};

use crate::calculation::resolve_holiday;
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, PayPeriod};

use super::types::CompanyCalendar;

/// Loads and validates a company calendar configuration.
///
/// The loader reads a single YAML file, checks the pay period boundaries
/// against the schedule type's span invariants, and verifies that every
/// holiday rule parses by resolving it against the schedule's begin year.
/// A calendar that loads successfully can therefore be rolled over and
/// queried without further validation errors.
///
/// # File format
///
/// ```text
/// company_id: 42
/// period_type: semi_monthly
/// period_begin: 2014-01-10
/// period_end: 2014-01-25
/// holidays:
///   - description: Independence Day
///     config: July 4th Observance
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_calendar::config::CalendarLoader;
///
/// let loader = CalendarLoader::load("./config/acme.yaml")?;
/// let period = loader.initial_period();
/// println!("Current period: {} to {}", period.begin(), period.end());
/// # Ok::<(), payroll_calendar::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    calendar: CompanyCalendar,
    initial_period: PayPeriod,
    holidays: Vec<Holiday>,
}

impl CalendarLoader {
    /// Loads a company calendar from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read.
    /// - [`EngineError::ConfigParseError`] if the YAML is malformed.
    /// - [`EngineError::InvalidPayPeriod`] if the period boundaries violate
    ///   the schedule type's span invariants.
    /// - [`EngineError::InvalidHoliday`] if a holiday entry has a blank
    ///   description.
    /// - A holiday configuration error if any rule fails to resolve.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let calendar = Self::load_yaml(path)?;

        let initial_period = PayPeriod::new(
            calendar.company_id,
            calendar.period_type,
            calendar.period_begin,
            calendar.period_end,
        )?;

        let probe_year = initial_period.begin().year();
        let mut holidays = Vec::with_capacity(calendar.holidays.len());
        for entry in &calendar.holidays {
            let holiday = Holiday::new(calendar.company_id, &entry.description, &entry.config)?;
            let resolved = resolve_holiday(holiday.config(), probe_year)?;
            debug!(
                description = %holiday.description(),
                config = %holiday.config(),
                resolved = %resolved,
                "Validated holiday rule"
            );
            holidays.push(holiday);
        }

        info!(
            company_id = calendar.company_id,
            period_type = %calendar.period_type,
            holiday_count = holidays.len(),
            "Loaded company calendar"
        );

        Ok(Self {
            calendar,
            initial_period,
            holidays,
        })
    }

    /// Loads and parses the YAML file.
    fn load_yaml(path: &Path) -> EngineResult<CompanyCalendar> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the raw calendar configuration.
    pub fn calendar(&self) -> &CompanyCalendar {
        &self.calendar
    }

    /// Returns the pay period described by the configuration.
    pub fn initial_period(&self) -> &PayPeriod {
        &self.initial_period
    }

    /// Returns the company's validated holiday rules.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodType;
    use chrono::NaiveDate;
    use std::io::Write;

    fn config_path() -> &'static str {
        "./config/acme.yaml"
    }

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = CalendarLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.calendar().company_id, 42);
        assert_eq!(loader.calendar().period_type, PeriodType::SemiMonthly);
        assert_eq!(loader.holidays().len(), 6);
    }

    #[test]
    fn test_initial_period_matches_file() {
        let loader = CalendarLoader::load(config_path()).unwrap();
        let period = loader.initial_period();
        assert_eq!(period.begin(), NaiveDate::from_ymd_opt(2014, 1, 10).unwrap());
        assert_eq!(period.end(), NaiveDate::from_ymd_opt(2014, 1, 25).unwrap());
        assert_eq!(period.company_id(), 42);
    }

    #[test]
    fn test_holidays_carry_company_id() {
        let loader = CalendarLoader::load(config_path()).unwrap();
        for holiday in loader.holidays() {
            assert_eq!(holiday.company_id(), 42);
        }
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = CalendarLoader::load("/nonexistent/calendar.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calendar.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let path = write_temp_config("payroll_calendar_malformed.yaml", "company_id: [not an id");
        let result = CalendarLoader::load(&path);
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_rejects_invalid_period_span() {
        let path = write_temp_config(
            "payroll_calendar_bad_span.yaml",
            r#"
company_id: 7
period_type: weekly
period_begin: 2014-01-01
period_end: 2014-01-10
"#,
        );
        let result = CalendarLoader::load(&path);
        assert!(matches!(
            result,
            Err(EngineError::InvalidPayPeriod { .. })
        ));
    }

    #[test]
    fn test_load_rejects_unparseable_holiday_rule() {
        let path = write_temp_config(
            "payroll_calendar_bad_holiday.yaml",
            r#"
company_id: 7
period_type: weekly
period_begin: 2014-01-01
period_end: 2014-01-07
holidays:
  - description: Mystery Day
    config: whenever we feel like it
"#,
        );
        let result = CalendarLoader::load(&path);
        match result {
            Err(EngineError::UnparseableHolidayConfig { config }) => {
                assert_eq!(config, "whenever we feel like it");
            }
            other => panic!("Expected UnparseableHolidayConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_blank_holiday_description() {
        let path = write_temp_config(
            "payroll_calendar_blank_description.yaml",
            r#"
company_id: 7
period_type: weekly
period_begin: 2014-01-01
period_end: 2014-01-07
holidays:
  - description: "  "
    config: July 4th
"#,
        );
        let result = CalendarLoader::load(&path);
        assert!(matches!(result, Err(EngineError::InvalidHoliday { .. })));
    }
}
