//! Workbook access through `calamine`.

use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};

use crate::error::{HoursError, HoursResult};

use super::grid::{CellSource, CellValue};

/// Opens a workbook and reads the sheet at `sheet_index` (0-based).
///
/// The workbook handle is dropped before returning; only the sheet's cell
/// range is kept.
pub fn open_timesheet_sheet(path: &Path, sheet_index: usize) -> HoursResult<Range<Data>> {
    let file = path.display().to_string();

    let mut workbook: Sheets<_> = open_workbook_auto(path).map_err(|e| HoursError::WorkbookOpen {
        file: file.clone(),
        message: e.to_string(),
    })?;

    let sheet_count = workbook.sheet_names().len();
    match workbook.worksheet_range_at(sheet_index) {
        Some(Ok(range)) => Ok(range),
        Some(Err(e)) => Err(HoursError::WorkbookOpen {
            file,
            message: format!("failed to read sheet {sheet_index}: {e}"),
        }),
        None => Err(HoursError::MissingWorksheet {
            file,
            sheet_index,
            sheet_count,
        }),
    }
}

impl CellSource for Range<Data> {
    fn cell(&self, row: u32, column: u32) -> CellValue {
        if row == 0 || column == 0 {
            return CellValue::Empty;
        }

        match self.get_value((row - 1, column - 1)) {
            None | Some(Data::Empty) => CellValue::Empty,
            Some(Data::String(s)) => CellValue::Text(s.clone()),
            Some(Data::Float(f)) => CellValue::Number(*f),
            Some(Data::Int(i)) => CellValue::Number(*i as f64),
            Some(Data::Bool(b)) => CellValue::Bool(*b),
            Some(Data::DateTime(dt)) if dt.is_datetime() => match dt.as_datetime() {
                Some(datetime) => CellValue::Date(datetime.date()),
                None => CellValue::Error(format!("date serial {} out of range", dt.as_f64())),
            },
            Some(Data::DateTime(dt)) => CellValue::Number(dt.as_f64()),
            Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => CellValue::Text(s.clone()),
            Some(Data::Error(e)) => CellValue::Error(format!("{e:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use chrono::NaiveDate;

    #[test]
    fn test_range_cells_are_one_based() {
        let mut range: Range<Data> = Range::new((8, 0), (8, 1));
        range.set_value((8, 0), Data::Float(45649.0));
        range.set_value((8, 1), Data::String("8".to_string()));

        assert_eq!(range.cell(9, 1), CellValue::Number(45649.0));
        assert_eq!(range.cell(9, 2), CellValue::Text("8".to_string()));
        assert_eq!(range.cell(10, 1), CellValue::Empty);
        assert_eq!(range.cell(0, 1), CellValue::Empty);
    }

    #[test]
    fn test_int_cells_become_numbers() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 0));
        range.set_value((0, 0), Data::Int(7));
        assert_eq!(range.cell(1, 1), CellValue::Number(7.0));
    }

    #[test]
    fn test_date_cells_resolve_in_1900_system() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 0));
        range.set_value(
            (0, 0),
            Data::DateTime(ExcelDateTime::new(45649.0, ExcelDateTimeType::DateTime, false)),
        );
        assert_eq!(
            range.cell(1, 1),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 12, 23).unwrap())
        );
    }

    #[test]
    fn test_date_cells_resolve_in_1904_system() {
        // 1904-based workbooks store the same day 1462 lower
        let mut range: Range<Data> = Range::new((0, 0), (0, 0));
        range.set_value(
            (0, 0),
            Data::DateTime(ExcelDateTime::new(
                45649.0 - 1462.0,
                ExcelDateTimeType::DateTime,
                true,
            )),
        );
        assert_eq!(
            range.cell(1, 1),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 12, 23).unwrap())
        );
    }

    #[test]
    fn test_iso_date_cells_stay_text() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 0));
        range.set_value((0, 0), Data::DateTimeIso("2024-12-23".to_string()));
        assert_eq!(range.cell(1, 1), CellValue::Text("2024-12-23".to_string()));
    }

    #[test]
    fn test_missing_file_is_workbook_open_error() {
        let result = open_timesheet_sheet(Path::new("/nonexistent/timesheet.xlsx"), 1);
        assert!(matches!(result, Err(HoursError::WorkbookOpen { .. })));
    }
}
