//! Run orchestration.
//!
//! [`HoursCalculator`] ties the pieces together for one run: it builds the
//! holiday calendar from the settings, extracts entries from every matching
//! workbook, aggregates them and returns a [`Report`].

use tracing::{info, info_span};
use uuid::Uuid;

use crate::calculation::{HolidayCalendar, calculate_hours_summary};
use crate::config::Settings;
use crate::error::HoursResult;
use crate::models::TimeEntry;
use crate::report::Report;
use crate::timesheet::{TimesheetExtractor, find_timesheets};

/// Computes the hours report for a set of settings.
///
/// Construction builds the holiday calendar, so a malformed public holiday
/// fails here, before any timesheet is opened.
///
/// # Example
///
/// ```no_run
/// use hours_calculator::calculator::HoursCalculator;
/// use hours_calculator::config::ConfigLoader;
///
/// let settings = ConfigLoader::load("appSettings.json")?.into_settings();
/// let report = HoursCalculator::new(&settings)?.run()?;
/// print!("{report}");
/// # Ok::<(), hours_calculator::error::HoursError>(())
/// ```
#[derive(Debug)]
pub struct HoursCalculator<'a> {
    settings: &'a Settings,
    calendar: HolidayCalendar,
}

impl<'a> HoursCalculator<'a> {
    /// Creates a calculator, building the holiday calendar.
    pub fn new(settings: &'a Settings) -> HoursResult<Self> {
        let calendar = HolidayCalendar::from_config(&settings.public_holidays)?;
        Ok(Self { settings, calendar })
    }

    /// Reads every matching workbook, in file-name order.
    ///
    /// Returns the number of workbooks read and the entries they hold. The
    /// first workbook that fails aborts the whole read.
    pub fn collect_entries(&self) -> HoursResult<(usize, Vec<TimeEntry>)> {
        let matcher = &self.settings.filename_match;
        let paths = find_timesheets(&self.settings.timesheet_folder, |name| {
            matcher.matches(name)
        })?;

        let extractor = TimesheetExtractor::new(&self.calendar, &self.settings.grid);
        let mut entries = Vec::new();

        for path in &paths {
            let extracted = extractor.extract_file(path)?;
            info!(
                file = %path.display(),
                entries = extracted.len(),
                "Read timesheet"
            );
            entries.extend(extracted);
        }

        Ok((paths.len(), entries))
    }

    /// Runs the calculation and returns the report.
    pub fn run(&self) -> HoursResult<Report> {
        let run_id = Uuid::new_v4();
        let span = info_span!("hours_run", run_id = %run_id);
        let _guard = span.enter();

        info!(
            folder = %self.settings.timesheet_folder.display(),
            holidays = self.calendar.holiday_count(),
            "Starting hours calculation"
        );

        let (timesheets, entries) = self.collect_entries()?;
        let summary = calculate_hours_summary(&entries, &self.settings.leave);

        info!(
            timesheets,
            entries = entries.len(),
            hours_worked = summary.hours_worked,
            hours_required = summary.hours_required,
            hours_short = summary.hours_short,
            "Hours calculation completed"
        );

        Ok(Report {
            timesheets,
            entries: entries.len(),
            leave: self.settings.leave,
            summary,
        })
    }
}
