//! Core data models for the Hours Calculator.
//!
//! This module contains the value types passed between the extractor, the
//! aggregator and the report.

mod leave;
mod time_entry;

pub use leave::{LeaveAllowances, LeaveBalance, LeaveCategory};
pub use time_entry::TimeEntry;
