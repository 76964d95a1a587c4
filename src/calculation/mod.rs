//! Calculation logic for the Hours Calculator.
//!
//! This module contains the holiday calendar used to classify dates and the
//! aggregation that turns time entries and leave balances into worked,
//! required and short hour totals.

mod aggregation;
mod holiday_calendar;

pub use aggregation::{HOURS_PER_WORKDAY, HoursSummary, calculate_hours_summary, leave_adjustment};
pub use holiday_calendar::{HolidayCalendar, parse_holiday_date};
