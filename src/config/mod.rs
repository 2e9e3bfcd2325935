//! Company calendar configuration.
//!
//! This module loads a company's payroll calendar (schedule type, current
//! pay period, and holiday rules) from a YAML file and validates it against
//! the engine's invariants.

mod loader;
mod types;

pub use loader::CalendarLoader;
pub use types::{CompanyCalendar, HolidayEntry};
