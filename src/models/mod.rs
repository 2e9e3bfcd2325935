//! Core data models for the Pay-Period and Holiday Calendar Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod pay_period;

pub use holiday::Holiday;
pub use pay_period::{PayPeriod, PeriodType};
