//! Error types for the Hours Calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a run can hit: bad configuration, unreadable timesheet
//! folders or workbooks, and spreadsheet cells that cannot be interpreted.

use thiserror::Error;

/// The main error type for the Hours Calculator.
///
/// Every variant carries enough context (config key, file name, row, column)
/// for an operator to fix the input and rerun.
///
/// # Example
///
/// ```
/// use hours_calculator::error::HoursError;
///
/// let error = HoursError::ConfigNotFound {
///     path: "appSettings.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: appSettings.json");
/// ```
#[derive(Debug, Error)]
pub enum HoursError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration field was missing or held an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfigField {
        /// The configuration key at fault.
        field: String,
        /// A description of what is wrong with it.
        message: String,
    },

    /// A configured public holiday was not a valid `YYYY/MM/DD` date.
    #[error("Invalid public holiday '{value}': {message}")]
    InvalidHolidayDate {
        /// The configured value as written.
        value: String,
        /// A description of what is wrong with it.
        message: String,
    },

    /// The timesheet folder could not be listed.
    #[error("Failed to read timesheet folder '{path}': {message}")]
    TimesheetFolderUnreadable {
        /// The folder path.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// A workbook could not be opened or a sheet could not be read.
    #[error("Failed to open workbook '{file}': {message}")]
    WorkbookOpen {
        /// The workbook path.
        file: String,
        /// The underlying reader error.
        message: String,
    },

    /// The workbook does not contain the sheet holding the timesheet grid.
    #[error("Workbook '{file}' has {sheet_count} sheet(s); expected a timesheet at sheet index {sheet_index}")]
    MissingWorksheet {
        /// The workbook path.
        file: String,
        /// The 0-based sheet index that was requested.
        sheet_index: usize,
        /// The number of sheets the workbook actually has.
        sheet_count: usize,
    },

    /// A cell inside the entry window could not be interpreted.
    #[error("Invalid cell in '{file}' at row {row}, column {column}: {message}")]
    InvalidCell {
        /// The workbook path.
        file: String,
        /// The 1-based spreadsheet row.
        row: u32,
        /// The 1-based spreadsheet column.
        column: u32,
        /// A description including the offending value.
        message: String,
    },

    /// The report could not be written to its output.
    #[error("Failed to write report: {message}")]
    ReportOutput {
        /// The underlying I/O or serialization error.
        message: String,
    },
}

/// The broad category of a [`HoursError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration; raised before any timesheet I/O.
    Configuration,
    /// A workbook's contents could not be interpreted.
    Parse,
    /// A folder or file could not be read.
    Io,
}

impl HoursError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::InvalidConfigField { .. }
            | Self::InvalidHolidayDate { .. } => ErrorKind::Configuration,
            Self::MissingWorksheet { .. } | Self::InvalidCell { .. } => ErrorKind::Parse,
            Self::TimesheetFolderUnreadable { .. }
            | Self::WorkbookOpen { .. }
            | Self::ReportOutput { .. } => ErrorKind::Io,
        }
    }

    /// Returns the process exit code used when a run fails with this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::InvalidConfigField { .. }
            | Self::InvalidHolidayDate { .. } => 2,
            Self::MissingWorksheet { .. } | Self::InvalidCell { .. } => 3,
            Self::TimesheetFolderUnreadable { .. }
            | Self::WorkbookOpen { .. }
            | Self::ReportOutput { .. } => 4,
        }
    }
}

/// A type alias for Results that return HoursError.
pub type HoursResult<T> = Result<T, HoursError>;
