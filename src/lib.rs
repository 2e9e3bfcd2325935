//! Pay-Period and Holiday Calendar Engine
//!
//! This crate provides the payroll schedule arithmetic for a timesheet backend:
//! deriving adjacent pay periods for weekly, bi-weekly, semi-monthly, and
//! monthly schedules, and resolving free-text holiday rules (for example
//! "3rd Monday in February" or "July 4th Observance") to concrete dates.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
