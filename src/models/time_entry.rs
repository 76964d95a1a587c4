//! Time entry model.
//!
//! This module contains the [`TimeEntry`] type: one dated hours value read
//! from a timesheet grid, classified against the holiday calendar.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calculation::HolidayCalendar;

/// A dated hours value extracted from a timesheet.
///
/// Whether the date is a holiday is decided once, by the calendar passed to
/// [`TimeEntry::new`], and cached on the entry.
///
/// # Example
///
/// ```
/// use hours_calculator::calculation::HolidayCalendar;
/// use hours_calculator::models::TimeEntry;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new([NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()]);
///
/// let christmas = TimeEntry::new(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(), 0, &calendar);
/// assert!(christmas.is_holiday());
/// assert!(!christmas.counts_toward_totals());
///
/// let monday = TimeEntry::new(NaiveDate::from_ymd_opt(2024, 12, 23).unwrap(), 8, &calendar);
/// assert!(!monday.is_holiday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    date: NaiveDate,
    hours: u32,
    is_holiday: bool,
}

impl TimeEntry {
    /// Creates an entry, classifying `date` with `calendar`.
    pub fn new(date: NaiveDate, hours: u32, calendar: &HolidayCalendar) -> Self {
        Self {
            date,
            hours,
            is_holiday: calendar.is_non_workday(date),
        }
    }

    /// The calendar date of the entry.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The hours logged for the date.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Whether the date is a weekend or public holiday.
    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    /// Whether the entry takes part in aggregation.
    ///
    /// A zero-hour holiday is noise and is dropped. A zero-hour workday is
    /// kept, so it still adds to the hours required.
    pub fn counts_toward_totals(&self) -> bool {
        self.hours > 0 || !self.is_holiday
    }
}
