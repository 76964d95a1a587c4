//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settings from
//! JSON or YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{HoursError, HoursResult};

use super::types::{RawSettings, Settings};

/// The serialization format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON, as in `appSettings.json`.
    Json,
    /// YAML.
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml`
    /// is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// Loads and provides access to the run settings.
///
/// # File Format
///
/// ```text
/// {
///   "TimesheetFolder": "C:/Timesheets",
///   "TimesheetFilenameContains": "Timesheet",
///   "LeaveDaysTaken": 3,
///   "LeaveDaysAllowed": 20,
///   "SickLeaveDaysTaken": 0,
///   "SickLeaveDaysAllowed": 10,
///   "FamilyLeaveDaysTaken": 0,
///   "FamilyLeaveDaysAllowed": 3,
///   "PublicHolidays": ["2024/12/25", "2024/12/26"]
/// }
/// ```
///
/// # Example
///
/// ```no_run
/// use hours_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("appSettings.json")?;
/// println!("Timesheets in {}", loader.settings().timesheet_folder.display());
/// # Ok::<(), hours_calculator::error::HoursError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    settings: Settings,
}

impl ConfigLoader {
    /// Loads settings from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid JSON/YAML or a value has the wrong type
    ///   (`ConfigParseError`)
    /// - A required field is missing or a value is unusable
    ///   (`InvalidConfigField`)
    pub fn load<P: AsRef<Path>>(path: P) -> HoursResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HoursError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings = Self::parse(&content, ConfigFormat::from_path(path), &path_str)?;

        info!(
            path = %path_str,
            folder = %settings.timesheet_folder.display(),
            public_holidays = settings.public_holidays.len(),
            "Loaded configuration"
        );

        Ok(Self {
            path: path.to_path_buf(),
            settings,
        })
    }

    /// Parses and validates settings from a string.
    ///
    /// `origin` labels parse errors, usually the file path.
    pub fn parse(content: &str, format: ConfigFormat, origin: &str) -> HoursResult<Settings> {
        let raw: RawSettings = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
        .map_err(|message| HoursError::ConfigParseError {
            path: origin.to_string(),
            message,
        })?;

        Settings::try_from(raw)
    }

    /// The path the settings were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }
}
