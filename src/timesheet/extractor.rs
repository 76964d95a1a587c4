//! Time entry extraction.
//!
//! This module scans the entry window of a timesheet sheet and turns each
//! filled date/hours pair into a [`TimeEntry`].

use std::path::Path;

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::calculation::HolidayCalendar;
use crate::error::{HoursError, HoursResult};
use crate::models::TimeEntry;

use super::grid::{CellSource, CellValue, GridLayout};
use super::workbook::open_timesheet_sheet;

/// Extracts time entries from timesheet sheets.
///
/// Holds the holiday calendar used to classify dates and the grid layout
/// describing where the date/hours pairs are.
///
/// # Example
///
/// ```
/// use hours_calculator::calculation::HolidayCalendar;
/// use hours_calculator::timesheet::{CellValue, GridLayout, MemoryGrid, TimesheetExtractor};
///
/// let calendar = HolidayCalendar::default();
/// let layout = GridLayout::default();
/// let extractor = TimesheetExtractor::new(&calendar, &layout);
///
/// let mut grid = MemoryGrid::new();
/// grid.set(9, 1, CellValue::Number(45649.0)); // 2024-12-23
/// grid.set(9, 2, CellValue::Number(8.0));
///
/// let entries = extractor.extract(&grid, "week.xlsx").unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].hours(), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimesheetExtractor<'a> {
    calendar: &'a HolidayCalendar,
    layout: &'a GridLayout,
}

impl<'a> TimesheetExtractor<'a> {
    /// Creates an extractor for the given calendar and layout.
    pub fn new(calendar: &'a HolidayCalendar, layout: &'a GridLayout) -> Self {
        Self { calendar, layout }
    }

    /// Opens a workbook and extracts the entries of its timesheet sheet.
    ///
    /// The workbook is closed before this returns, whether or not the scan
    /// succeeded.
    pub fn extract_file(&self, path: &Path) -> HoursResult<Vec<TimeEntry>> {
        let sheet = open_timesheet_sheet(path, self.layout.sheet_index)?;
        self.extract(&sheet, &path.display().to_string())
    }

    /// Extracts the entries of one sheet.
    ///
    /// # Behavior
    ///
    /// - A pair whose hours cell is empty or whitespace yields no entry
    /// - Otherwise the date cell must hold a date (a date cell, a serial, or
    ///   ISO `YYYY-MM-DD` text) and the hours cell a non-negative number, or
    ///   the scan fails with [`HoursError::InvalidCell`]
    /// - Numeric hours are rounded to the nearest whole hour, ties to even;
    ///   text hours must already be whole
    /// - Zero-hour holidays are dropped; zero-hour workdays are kept
    ///
    /// `file` only labels errors and log lines.
    pub fn extract(&self, source: &impl CellSource, file: &str) -> HoursResult<Vec<TimeEntry>> {
        let mut entries = Vec::new();

        for (row, date_column, hours_column) in self.layout.cell_pairs() {
            let hours_cell = source.cell(row, hours_column);
            if hours_cell.is_blank() {
                continue;
            }

            let date = parse_date_cell(&source.cell(row, date_column)).map_err(|message| {
                HoursError::InvalidCell {
                    file: file.to_string(),
                    row,
                    column: date_column,
                    message,
                }
            })?;

            let hours = parse_hours_cell(&hours_cell).map_err(|message| HoursError::InvalidCell {
                file: file.to_string(),
                row,
                column: hours_column,
                message,
            })?;

            let entry = TimeEntry::new(date, hours, self.calendar);
            if entry.counts_toward_totals() {
                entries.push(entry);
            } else {
                debug!(file, date = %date, "Dropped zero-hour holiday");
            }
        }

        debug!(file, entries = entries.len(), "Extracted time entries");
        Ok(entries)
    }
}

/// Converts a spreadsheet date serial to a calendar date.
///
/// Serials count days from 1899-12-30; any fractional time of day is ignored.
///
/// # Example
///
/// ```
/// use hours_calculator::timesheet::date_from_serial;
/// use chrono::NaiveDate;
///
/// assert_eq!(date_from_serial(45651.0), NaiveDate::from_ymd_opt(2024, 12, 25));
/// assert_eq!(date_from_serial(45651.75), NaiveDate::from_ymd_opt(2024, 12, 25));
/// assert_eq!(date_from_serial(-1.0), None);
/// ```
pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 || serial > f64::from(u32::MAX) {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.floor() as u64))
}

fn parse_date_cell(cell: &CellValue) -> Result<NaiveDate, String> {
    let date = match cell {
        CellValue::Date(date) => Some(*date),
        CellValue::Number(n) => date_from_serial(*n),
        CellValue::Text(text) => parse_date_text(text.trim()),
        _ => None,
    };

    date.ok_or_else(|| format!("expected a date, found {cell}"))
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(serial) = text.parse::<f64>() {
        return date_from_serial(serial);
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .ok()
}

fn parse_hours_cell(cell: &CellValue) -> Result<u32, String> {
    let hours = match cell {
        CellValue::Number(n) if n.is_finite() && *n >= 0.0 => {
            let rounded = n.round_ties_even();
            (rounded <= f64::from(u32::MAX)).then_some(rounded as u32)
        }
        CellValue::Text(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };

    hours.ok_or_else(|| format!("expected a non-negative number of hours, found {cell}"))
}
