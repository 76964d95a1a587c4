//! Configuration types for the Hours Calculator.
//!
//! This module contains the structures deserialized from the settings file
//! (PascalCase keys, as in `appSettings.json`) and the validated
//! [`Settings`] handed to the rest of the crate.

use std::path::PathBuf;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::{HoursError, HoursResult};
use crate::models::{LeaveAllowances, LeaveBalance};
use crate::timesheet::{FilenameMatch, GridLayout};

/// The settings file as written, before validation.
///
/// Day counts may be written as numbers or as numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSettings {
    /// Folder scanned for timesheet workbooks.
    pub timesheet_folder: Option<String>,
    /// Substring every timesheet file name contains.
    pub timesheet_filename_contains: Option<String>,
    /// Prefix every timesheet file name starts with.
    pub timesheet_filename_prefix: Option<String>,
    /// Ordinary leave days taken.
    #[serde(default, deserialize_with = "day_count")]
    pub leave_days_taken: u32,
    /// Ordinary leave days allowed.
    #[serde(default, deserialize_with = "day_count")]
    pub leave_days_allowed: u32,
    /// Sick leave days taken.
    #[serde(default, deserialize_with = "day_count")]
    pub sick_leave_days_taken: u32,
    /// Sick leave days allowed.
    #[serde(default, deserialize_with = "day_count")]
    pub sick_leave_days_allowed: u32,
    /// Family leave days taken.
    #[serde(default, deserialize_with = "day_count")]
    pub family_leave_days_taken: u32,
    /// Family leave days allowed.
    #[serde(default, deserialize_with = "day_count")]
    pub family_leave_days_allowed: u32,
    /// Public holidays as `YYYY/MM/DD` strings.
    #[serde(default)]
    pub public_holidays: Vec<String>,
    /// Overrides for the timesheet grid geometry.
    #[serde(default)]
    pub timesheet_grid: GridLayout,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder scanned for timesheet workbooks.
    pub timesheet_folder: PathBuf,
    /// Which files in the folder are timesheets.
    pub filename_match: FilenameMatch,
    /// Leave balances for the three leave categories.
    pub leave: LeaveAllowances,
    /// Public holidays as configured; parsed when the calendar is built.
    pub public_holidays: Vec<String>,
    /// Where the date/hours pairs sit in each workbook.
    pub grid: GridLayout,
}

impl TryFrom<RawSettings> for Settings {
    type Error = HoursError;

    fn try_from(raw: RawSettings) -> HoursResult<Self> {
        let timesheet_folder = match raw.timesheet_folder {
            Some(folder) if !folder.trim().is_empty() => PathBuf::from(folder),
            Some(_) => return Err(invalid_field("TimesheetFolder", "must not be blank")),
            None => return Err(invalid_field("TimesheetFolder", "is required")),
        };

        let filename_match = match (
            raw.timesheet_filename_contains,
            raw.timesheet_filename_prefix,
        ) {
            (Some(pattern), None) => FilenameMatch::Contains(pattern),
            (None, Some(pattern)) => FilenameMatch::Prefix(pattern),
            (Some(_), Some(_)) => {
                return Err(invalid_field(
                    "TimesheetFilenamePrefix",
                    "cannot be combined with TimesheetFilenameContains",
                ));
            }
            (None, None) => {
                return Err(invalid_field(
                    "TimesheetFilenameContains",
                    "is required (or TimesheetFilenamePrefix)",
                ));
            }
        };

        raw.timesheet_grid.validate()?;

        Ok(Self {
            timesheet_folder,
            filename_match,
            leave: LeaveAllowances {
                ordinary: LeaveBalance::new(raw.leave_days_taken, raw.leave_days_allowed),
                sick: LeaveBalance::new(raw.sick_leave_days_taken, raw.sick_leave_days_allowed),
                family: LeaveBalance::new(
                    raw.family_leave_days_taken,
                    raw.family_leave_days_allowed,
                ),
            },
            public_holidays: raw.public_holidays,
            grid: raw.timesheet_grid,
        })
    }
}

fn invalid_field(field: &str, message: &str) -> HoursError {
    HoursError::InvalidConfigField {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Accepts a non-negative day count written as a number or a numeric string.
fn day_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DayCount {
        Number(u32),
        Text(String),
    }

    match DayCount::deserialize(deserializer)? {
        DayCount::Number(n) => Ok(n),
        DayCount::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid day count '{text}'"))),
    }
}
