//! Timesheet file discovery.
//!
//! This module selects the workbooks to process from the timesheet folder
//! using a configurable file-name predicate.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HoursError, HoursResult};

/// How timesheet file names are matched.
///
/// # Example
///
/// ```
/// use hours_calculator::timesheet::FilenameMatch;
///
/// let contains = FilenameMatch::Contains("Timesheet".to_string());
/// assert!(contains.matches("2024-12 Timesheet.xlsx"));
///
/// let prefix = FilenameMatch::Prefix("Timesheet".to_string());
/// assert!(!prefix.matches("2024-12 Timesheet.xlsx"));
/// assert!(prefix.matches("Timesheet 2024-12.xlsx"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "pattern")]
pub enum FilenameMatch {
    /// The file name contains the pattern.
    Contains(String),
    /// The file name starts with the pattern.
    Prefix(String),
}

impl FilenameMatch {
    /// Returns `true` if `file_name` is a timesheet.
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            FilenameMatch::Contains(pattern) => file_name.contains(pattern.as_str()),
            FilenameMatch::Prefix(pattern) => file_name.starts_with(pattern.as_str()),
        }
    }
}

/// Lists the files in `folder` whose file name satisfies `is_timesheet`.
///
/// Subdirectories and non-matching files are skipped. The result is sorted
/// by path so runs are repeatable.
pub fn find_timesheets<F>(folder: &Path, is_timesheet: F) -> HoursResult<Vec<PathBuf>>
where
    F: Fn(&str) -> bool,
{
    let unreadable = |e: std::io::Error| HoursError::TimesheetFolderUnreadable {
        path: folder.display().to_string(),
        message: e.to_string(),
    };

    let mut timesheets = Vec::new();

    for entry in fs::read_dir(folder).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        if !entry.file_type().map_err(unreadable)?.is_file() {
            debug!(path = %path.display(), "Skipped non-file entry");
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if is_timesheet(&file_name) {
            timesheets.push(path);
        } else {
            debug!(file = %file_name, "Skipped non-matching file");
        }
    }

    timesheets.sort();
    Ok(timesheets)
}
