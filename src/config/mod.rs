//! Configuration loading for the Hours Calculator.
//!
//! This module loads the run settings (timesheet folder, file-name match,
//! leave balances, public holidays and grid geometry) from a JSON or YAML
//! file and validates them before any timesheet is read.
//!
//! # Example
//!
//! ```no_run
//! use hours_calculator::config::ConfigLoader;
//!
//! let settings = ConfigLoader::load("appSettings.json").unwrap().into_settings();
//! println!("Scanning {}", settings.timesheet_folder.display());
//! ```

mod loader;
mod types;

pub use loader::{ConfigFormat, ConfigLoader};
pub use types::{RawSettings, Settings};
