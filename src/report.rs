//! The end-of-run report.
//!
//! [`Report`] renders as the console text operators read; it also
//! serializes to JSON for scripting.

use std::io::Write;

use serde::Serialize;

use crate::calculation::HoursSummary;
use crate::error::{HoursError, HoursResult};
use crate::models::LeaveAllowances;

/// How a [`Report`] is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// The console layout of the `Display` impl.
    #[default]
    Text,
    /// Pretty-printed JSON followed by a newline.
    Json,
}

/// The totals of a completed run.
///
/// # Example
///
/// ```
/// use hours_calculator::calculation::HoursSummary;
/// use hours_calculator::models::{LeaveAllowances, LeaveBalance};
/// use hours_calculator::report::Report;
///
/// let report = Report {
///     timesheets: 1,
///     entries: 2,
///     leave: LeaveAllowances {
///         ordinary: LeaveBalance::new(1, 20),
///         ..LeaveAllowances::default()
///     },
///     summary: HoursSummary {
///         hours_worked: 16,
///         base_hours_required: 24,
///         hours_required: 16,
///         hours_short: 0,
///     },
/// };
///
/// let text = report.to_string();
/// assert!(text.starts_with("Leave days taken: 1 of 20\n"));
/// assert!(text.ends_with("Hours short: 0\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of timesheet workbooks read.
    pub timesheets: usize,
    /// Number of time entries that took part in the totals.
    pub entries: usize,
    /// Leave taken against allowances.
    pub leave: LeaveAllowances,
    /// Worked, required and short hours.
    pub summary: HoursSummary,
}

impl Report {
    /// Writes the report to `out` and flushes it.
    ///
    /// Fails with [`HoursError::ReportOutput`] if the writer does, so a
    /// closed stdout surfaces as a failed run.
    pub fn write_to<W: Write>(&self, out: &mut W, format: ReportFormat) -> HoursResult<()> {
        let output_error = |message: String| HoursError::ReportOutput { message };

        match format {
            ReportFormat::Text => write!(out, "{self}"),
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(self)
                    .map_err(|e| output_error(e.to_string()))?;
                writeln!(out, "{json}")
            }
        }
        .and_then(|()| out.flush())
        .map_err(|e| output_error(e.to_string()))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (category, balance) in self.leave.iter() {
            writeln!(
                f,
                "{} days taken: {} of {}",
                category, balance.taken, balance.allowed
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Hours worked: {}", self.summary.hours_worked)?;
        writeln!(f, "Hours required: {}", self.summary.hours_required)?;
        writeln!(f, "Hours short: {}", self.summary.hours_short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveBalance;

    fn sample_report() -> Report {
        Report {
            timesheets: 2,
            entries: 9,
            leave: LeaveAllowances {
                ordinary: LeaveBalance::new(3, 2),
                sick: LeaveBalance::new(0, 10),
                family: LeaveBalance::new(1, 3),
            },
            summary: HoursSummary {
                hours_worked: 30,
                base_hours_required: 56,
                hours_required: 32,
                hours_short: 2,
            },
        }
    }

    #[test]
    fn test_text_layout() {
        let expected = "Leave days taken: 3 of 2\n\
                        Sick leave days taken: 0 of 10\n\
                        Family leave days taken: 1 of 3\n\
                        \n\
                        Hours worked: 30\n\
                        Hours required: 32\n\
                        Hours short: 2\n";
        assert_eq!(sample_report().to_string(), expected);
    }

    #[test]
    fn test_surplus_prints_negative_short() {
        let mut report = sample_report();
        report.summary.hours_worked = 40;
        report.summary.hours_short = -8;
        assert!(report.to_string().contains("Hours short: -8\n"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_text_matches_display() {
        let report = sample_report();
        let mut out = Vec::new();
        report.write_to(&mut out, ReportFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.to_string());
    }

    #[test]
    fn test_write_to_json_is_one_document() {
        let mut out = Vec::new();
        sample_report().write_to(&mut out, ReportFormat::Json).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["summary"]["hours_short"], 2);
    }

    #[test]
    fn test_failed_write_is_report_output_error() {
        for format in [ReportFormat::Text, ReportFormat::Json] {
            let err = sample_report()
                .write_to(&mut ClosedPipe, format)
                .unwrap_err();
            assert!(matches!(err, HoursError::ReportOutput { .. }));
            assert_eq!(err.exit_code(), 4);
        }
    }

    #[test]
    fn test_json_serialization() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["summary"]["hours_required"], 32);
        assert_eq!(json["leave"]["ordinary"]["taken"], 3);
        assert_eq!(json["timesheets"], 2);
    }
}
