//! Timesheet reading for the Hours Calculator.
//!
//! This module finds timesheet workbooks in a folder, opens the sheet that
//! holds the timesheet grid, and extracts dated hour entries from a fixed
//! window of date/hours column pairs.
//!
//! # Example
//!
//! ```no_run
//! use hours_calculator::calculation::HolidayCalendar;
//! use hours_calculator::timesheet::{FilenameMatch, GridLayout, TimesheetExtractor, find_timesheets};
//! use std::path::Path;
//!
//! let calendar = HolidayCalendar::default();
//! let layout = GridLayout::default();
//! let extractor = TimesheetExtractor::new(&calendar, &layout);
//! let matcher = FilenameMatch::Contains("Timesheet".to_string());
//!
//! for path in find_timesheets(Path::new("./timesheets"), |name| matcher.matches(name))? {
//!     let entries = extractor.extract_file(&path)?;
//!     println!("{}: {} entries", path.display(), entries.len());
//! }
//! # Ok::<(), hours_calculator::error::HoursError>(())
//! ```

mod discovery;
mod extractor;
mod grid;
mod workbook;

pub use discovery::{FilenameMatch, find_timesheets};
pub use extractor::{TimesheetExtractor, date_from_serial};
pub use grid::{CellSource, CellValue, GridLayout, MemoryGrid};
pub use workbook::open_timesheet_sheet;
