//! Hours aggregation.
//!
//! This module reduces the extracted time entries into worked and required
//! hour totals, then adjusts the required hours for leave taken against the
//! leave allowances.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{LeaveAllowances, LeaveBalance, TimeEntry};

/// The number of hours expected on each workday.
pub const HOURS_PER_WORKDAY: i64 = 8;

/// Worked versus required hours for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSummary {
    /// Total hours logged across all entries.
    pub hours_worked: i64,
    /// Required hours before any leave adjustment.
    pub base_hours_required: i64,
    /// Required hours after leave adjustments.
    pub hours_required: i64,
    /// `hours_required - hours_worked`; negative means a surplus.
    pub hours_short: i64,
}

/// Calculates the hours summary for a set of entries and leave balances.
///
/// # Behavior
///
/// - Every entry contributes its hours to `hours_worked`
/// - Every non-holiday entry adds [`HOURS_PER_WORKDAY`] to the required hours,
///   including workdays logged with zero hours
/// - Leave is applied per category with [`leave_adjustment`]
///
/// # Example
///
/// ```
/// use hours_calculator::calculation::{calculate_hours_summary, HolidayCalendar};
/// use hours_calculator::models::{LeaveAllowances, TimeEntry};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::default();
/// let entries = vec![
///     TimeEntry::new(NaiveDate::from_ymd_opt(2024, 12, 23).unwrap(), 8, &calendar),
///     TimeEntry::new(NaiveDate::from_ymd_opt(2024, 12, 24).unwrap(), 6, &calendar),
/// ];
///
/// let summary = calculate_hours_summary(&entries, &LeaveAllowances::default());
/// assert_eq!(summary.hours_worked, 14);
/// assert_eq!(summary.hours_required, 16);
/// assert_eq!(summary.hours_short, 2);
/// ```
pub fn calculate_hours_summary(entries: &[TimeEntry], leave: &LeaveAllowances) -> HoursSummary {
    let hours_worked: i64 = entries.iter().map(|e| i64::from(e.hours())).sum();
    let workdays = entries.iter().filter(|e| !e.is_holiday()).count() as i64;
    let base_hours_required = workdays * HOURS_PER_WORKDAY;

    let mut hours_required = base_hours_required;
    for (category, balance) in leave.iter() {
        let adjustment = leave_adjustment(balance);
        if adjustment != 0 {
            debug!(
                category = %category,
                taken = balance.taken,
                allowed = balance.allowed,
                adjustment,
                "Applied leave adjustment"
            );
        }
        hours_required += adjustment;
    }

    HoursSummary {
        hours_worked,
        base_hours_required,
        hours_required,
        hours_short: hours_required - hours_worked,
    }
}

/// The change in required hours caused by one leave category.
///
/// Leave taken reduces the obligation by [`HOURS_PER_WORKDAY`] per day, but
/// days taken beyond the allowance are added back, so the net reduction is
/// capped at the allowance.
///
/// # Example
///
/// ```
/// use hours_calculator::calculation::leave_adjustment;
/// use hours_calculator::models::LeaveBalance;
///
/// assert_eq!(leave_adjustment(LeaveBalance::new(0, 5)), 0);
/// assert_eq!(leave_adjustment(LeaveBalance::new(2, 5)), -16);
/// assert_eq!(leave_adjustment(LeaveBalance::new(3, 2)), -16);
/// ```
pub fn leave_adjustment(balance: LeaveBalance) -> i64 {
    let mut adjustment = 0;

    if balance.taken > 0 {
        adjustment -= i64::from(balance.taken) * HOURS_PER_WORKDAY;
    }

    if balance.taken > balance.allowed {
        adjustment += i64::from(balance.excess_days()) * HOURS_PER_WORKDAY;
    }

    adjustment
}
