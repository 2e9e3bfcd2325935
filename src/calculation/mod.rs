//! Calculation logic for the Pay-Period and Holiday Calendar Engine.
//!
//! This module contains the schedule rollover arithmetic for all four period
//! types, the holiday rule resolver with its weekend-observance and ordinal
//! weekday handling, and the holiday containment query that ties the two
//! together. Everything here is a pure function over immutable inputs: no
//! shared state, no I/O, safe to call concurrently and to memoize.

mod containment;
mod date_math;
mod holiday_date;
mod rollover;

pub use containment::period_contains_holiday;
pub use holiday_date::resolve_holiday;
pub use rollover::{next_period, previous_period};
