//! Timesheet grid geometry and cell access.
//!
//! The extractor never talks to a spreadsheet library directly. It reads
//! cells through [`CellSource`], using the coordinates described by a
//! [`GridLayout`], so the same scan runs against a real worksheet or an
//! in-memory grid.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HoursError, HoursResult};

/// The value of a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value.
    Empty,
    /// A number, including raw date serials.
    Number(f64),
    /// A date-typed cell, already resolved to a calendar date.
    Date(NaiveDate),
    /// Text.
    Text(String),
    /// A boolean.
    Bool(bool),
    /// A spreadsheet error value such as `#REF!`.
    Error(String),
}

impl CellValue {
    /// Returns `true` for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => write!(f, "empty cell"),
            CellValue::Number(n) => write!(f, "number {n}"),
            CellValue::Date(d) => write!(f, "date {d}"),
            CellValue::Text(text) => write!(f, "text '{text}'"),
            CellValue::Bool(b) => write!(f, "boolean {b}"),
            CellValue::Error(e) => write!(f, "error value {e}"),
        }
    }
}

/// Read access to a sheet, addressed by 1-based row and column.
pub trait CellSource {
    /// Returns the value at `(row, column)`; cells outside the data are empty.
    fn cell(&self, row: u32, column: u32) -> CellValue;
}

/// An in-memory sheet, handy for tests and benchmarks.
///
/// # Example
///
/// ```
/// use hours_calculator::timesheet::{CellSource, CellValue, MemoryGrid};
///
/// let mut grid = MemoryGrid::new();
/// grid.set(9, 1, CellValue::Number(45649.0));
/// grid.set(9, 2, CellValue::Text("8".to_string()));
///
/// assert_eq!(grid.cell(9, 2), CellValue::Text("8".to_string()));
/// assert_eq!(grid.cell(10, 2), CellValue::Empty);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    cells: HashMap<(u32, u32), CellValue>,
}

impl MemoryGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value at `(row, column)`.
    pub fn set(&mut self, row: u32, column: u32, value: CellValue) -> &mut Self {
        self.cells.insert((row, column), value);
        self
    }
}

impl CellSource for MemoryGrid {
    fn cell(&self, row: u32, column: u32) -> CellValue {
        self.cells
            .get(&(row, column))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }
}

/// Where the date/hours pairs sit inside a timesheet workbook.
///
/// Rows and columns are 1-based, as shown in a spreadsheet application. Each
/// hours column is the column right after its date column.
///
/// # Example
///
/// ```
/// use hours_calculator::timesheet::GridLayout;
///
/// let layout = GridLayout::default();
/// assert_eq!(layout.sheet_index, 1);
/// assert_eq!(layout.cell_pairs().count(), 35);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GridLayout {
    /// 0-based index of the sheet holding the grid.
    pub sheet_index: usize,
    /// First row scanned (inclusive).
    pub first_row: u32,
    /// Last row scanned (inclusive).
    pub last_row: u32,
    /// The date column of each date/hours pair.
    pub date_columns: Vec<u32>,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            sheet_index: 1,
            first_row: 9,
            last_row: 15,
            date_columns: vec![1, 3, 5, 7, 9],
        }
    }
}

impl GridLayout {
    /// Checks that the layout describes a non-empty window.
    pub fn validate(&self) -> HoursResult<()> {
        let invalid = |field: &str, message: &str| HoursError::InvalidConfigField {
            field: format!("TimesheetGrid.{field}"),
            message: message.to_string(),
        };

        if self.first_row == 0 {
            return Err(invalid("FirstRow", "rows are numbered from 1"));
        }
        if self.last_row < self.first_row {
            return Err(invalid("LastRow", "must not be before FirstRow"));
        }
        if self.date_columns.is_empty() {
            return Err(invalid("DateColumns", "at least one date column is required"));
        }
        if self.date_columns.contains(&0) {
            return Err(invalid("DateColumns", "columns are numbered from 1"));
        }
        if self.date_columns.contains(&u32::MAX) {
            return Err(invalid("DateColumns", "the hours column must fit after the date column"));
        }
        Ok(())
    }

    /// Iterates `(row, date_column, hours_column)` in row-major order.
    pub fn cell_pairs(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        (self.first_row..=self.last_row).flat_map(move |row| {
            self.date_columns
                .iter()
                .map(move |&column| (row, column, column + 1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_template() {
        let layout = GridLayout::default();
        let pairs: Vec<_> = layout.cell_pairs().collect();

        assert_eq!(pairs.len(), 35);
        assert_eq!(pairs[0], (9, 1, 2));
        assert_eq!(pairs[4], (9, 9, 10));
        assert_eq!(pairs[5], (10, 1, 2));
        assert_eq!(pairs[34], (15, 9, 10));
    }

    #[test]
    fn test_validate_rejects_inverted_rows() {
        let layout = GridLayout {
            first_row: 15,
            last_row: 9,
            ..GridLayout::default()
        };
        match layout.validate() {
            Err(HoursError::InvalidConfigField { field, .. }) => {
                assert_eq!(field, "TimesheetGrid.LastRow");
            }
            other => panic!("Expected InvalidConfigField, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_based_coordinates() {
        let layout = GridLayout {
            date_columns: vec![0, 2],
            ..GridLayout::default()
        };
        assert!(layout.validate().is_err());

        let layout = GridLayout {
            first_row: 0,
            ..GridLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_last_column() {
        let layout = GridLayout {
            date_columns: vec![1, u32::MAX],
            ..GridLayout::default()
        };
        match layout.validate() {
            Err(HoursError::InvalidConfigField { field, .. }) => {
                assert_eq!(field, "TimesheetGrid.DateColumns");
            }
            other => panic!("Expected InvalidConfigField, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_columns() {
        let layout = GridLayout {
            date_columns: vec![],
            ..GridLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_blank_cells() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Text("0".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_deserialize_partial_layout_uses_defaults() {
        let layout: GridLayout = serde_json::from_str(r#"{ "LastRow": 20 }"#).unwrap();
        assert_eq!(layout.first_row, 9);
        assert_eq!(layout.last_row, 20);
        assert_eq!(layout.date_columns, vec![1, 3, 5, 7, 9]);
    }
}
