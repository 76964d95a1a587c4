//! Holiday calendar.
//!
//! This module provides [`HolidayCalendar`], which decides whether a calendar
//! date is a non-workday: a Saturday, a Sunday, a configured public holiday,
//! or the Monday after a public holiday that falls on a Sunday.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{HoursError, HoursResult};

/// The set of non-working dates for a run.
///
/// Built once from the configured public holidays and read-only afterwards.
///
/// # Example
///
/// ```
/// use hours_calculator::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// // 2022-12-25 is a Sunday, so Monday 2022-12-26 is observed as well
/// let calendar = HolidayCalendar::from_config(&["2022/12/25".to_string()]).unwrap();
///
/// assert!(calendar.is_non_workday(NaiveDate::from_ymd_opt(2022, 12, 26).unwrap()));
/// assert!(!calendar.is_non_workday(NaiveDate::from_ymd_opt(2022, 12, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from public holiday dates.
    ///
    /// A holiday on a Sunday also makes the following Monday a holiday.
    pub fn new<I>(public_holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut holidays = BTreeSet::new();

        for date in public_holidays {
            holidays.insert(date);

            if date.weekday() == Weekday::Sun {
                if let Some(monday) = date.checked_add_days(Days::new(1)) {
                    holidays.insert(monday);
                }
            }
        }

        Self { holidays }
    }

    /// Builds a calendar from configured `YYYY/MM/DD` strings.
    ///
    /// Blank strings are skipped. Any other malformed value fails the whole
    /// construction with [`HoursError::InvalidHolidayDate`].
    pub fn from_config(values: &[String]) -> HoursResult<Self> {
        let dates = values
            .iter()
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_holiday_date(value))
            .collect::<HoursResult<Vec<_>>>()?;

        let calendar = Self::new(dates);
        debug!(
            configured = values.len(),
            effective = calendar.holidays.len(),
            "Built holiday calendar"
        );
        Ok(calendar)
    }

    /// Returns `true` for weekends and holidays.
    pub fn is_non_workday(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || self.holidays.contains(&date)
    }

    /// Returns `true` if `date` is in the holiday set itself, ignoring weekends.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// The effective holiday dates in ascending order.
    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    /// The number of effective holiday dates, observed Mondays included.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

/// Parses a configured holiday in `YYYY/MM/DD` form.
///
/// # Example
///
/// ```
/// use hours_calculator::calculation::parse_holiday_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_holiday_date("2024/12/25").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
/// );
/// assert!(parse_holiday_date("2024-12-25").is_err());
/// ```
pub fn parse_holiday_date(value: &str) -> HoursResult<NaiveDate> {
    let invalid = |message: String| HoursError::InvalidHolidayDate {
        value: value.to_string(),
        message,
    };

    let parts: Vec<&str> = value.trim().split('/').map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid(format!(
            "expected year/month/day, found {} part(s)",
            parts.len()
        )));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| invalid(format!("year '{year}' is not a number")))?;
    let month: u32 = month
        .parse()
        .map_err(|_| invalid(format!("month '{month}' is not a number")))?;
    let day: u32 = day
        .parse()
        .map_err(|_| invalid(format!("day '{day}' is not a number")))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("no such calendar date".to_string()))
}
