//! Leave balance models.
//!
//! This module contains the [`LeaveCategory`], [`LeaveBalance`] and
//! [`LeaveAllowances`] types describing how many leave days were taken
//! against how many are allowed.

use serde::{Deserialize, Serialize};

/// One of the three independent leave accounting buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Ordinary (annual) leave.
    Ordinary,
    /// Sick leave.
    Sick,
    /// Family responsibility leave.
    Family,
}

impl LeaveCategory {
    /// All categories in the order they are reported and applied.
    pub const ALL: [LeaveCategory; 3] = [
        LeaveCategory::Ordinary,
        LeaveCategory::Sick,
        LeaveCategory::Family,
    ];

    /// The label used when reporting this category, e.g. "Sick leave".
    pub fn label(&self) -> &'static str {
        match self {
            LeaveCategory::Ordinary => "Leave",
            LeaveCategory::Sick => "Sick leave",
            LeaveCategory::Family => "Family leave",
        }
    }
}

impl std::fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Leave days taken against leave days allowed, in whole days.
///
/// # Example
///
/// ```
/// use hours_calculator::models::LeaveBalance;
///
/// let balance = LeaveBalance::new(3, 2);
/// assert_eq!(balance.excess_days(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Days of leave taken in the period.
    pub taken: u32,
    /// Days of leave the person is entitled to.
    pub allowed: u32,
}

impl LeaveBalance {
    /// Creates a balance from taken and allowed day counts.
    pub fn new(taken: u32, allowed: u32) -> Self {
        Self { taken, allowed }
    }

    /// Days taken beyond the allowance; zero when within it.
    pub fn excess_days(&self) -> u32 {
        self.taken.saturating_sub(self.allowed)
    }
}

/// The leave balances for all three categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAllowances {
    /// Ordinary leave.
    pub ordinary: LeaveBalance,
    /// Sick leave.
    pub sick: LeaveBalance,
    /// Family leave.
    pub family: LeaveBalance,
}

impl LeaveAllowances {
    /// Returns the balance for a category.
    pub fn get(&self, category: LeaveCategory) -> LeaveBalance {
        match category {
            LeaveCategory::Ordinary => self.ordinary,
            LeaveCategory::Sick => self.sick,
            LeaveCategory::Family => self.family,
        }
    }

    /// Iterates the balances in reporting order (ordinary, sick, family).
    pub fn iter(&self) -> impl Iterator<Item = (LeaveCategory, LeaveBalance)> + '_ {
        LeaveCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excess_days_within_allowance() {
        assert_eq!(LeaveBalance::new(2, 5).excess_days(), 0);
        assert_eq!(LeaveBalance::new(5, 5).excess_days(), 0);
    }

    #[test]
    fn test_excess_days_over_allowance() {
        assert_eq!(LeaveBalance::new(7, 5).excess_days(), 2);
    }

    #[test]
    fn test_iter_is_in_reporting_order() {
        let allowances = LeaveAllowances {
            ordinary: LeaveBalance::new(1, 10),
            sick: LeaveBalance::new(2, 5),
            family: LeaveBalance::new(3, 3),
        };

        let categories: Vec<_> = allowances.iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec![
                LeaveCategory::Ordinary,
                LeaveCategory::Sick,
                LeaveCategory::Family
            ]
        );
        assert_eq!(allowances.get(LeaveCategory::Sick), LeaveBalance::new(2, 5));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(LeaveCategory::Ordinary.to_string(), "Leave");
        assert_eq!(LeaveCategory::Sick.to_string(), "Sick leave");
        assert_eq!(LeaveCategory::Family.to_string(), "Family leave");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&LeaveCategory::Family).unwrap();
        assert_eq!(json, "\"family\"");
    }
}
