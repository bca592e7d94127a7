//! Call schedule models.
//!
//! A [`CallSchedule`] holds one [`CallDayAssignment`] per calendar day of a
//! year. Each day is classified as a weekday, weekend, or holiday and carries
//! zero or more tier assignments.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The classification of a calendar day for call purposes.
///
/// # Example
///
/// ```
/// use call_budget_engine::models::CallDayType;
///
/// assert_eq!(CallDayType::Holiday.to_string(), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallDayType {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday or Sunday, not a holiday.
    Weekend,
    /// A holiday, regardless of the day of the week.
    Holiday,
}

impl std::fmt::Display for CallDayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallDayType::Weekday => write!(f, "Weekday"),
            CallDayType::Weekend => write!(f, "Weekend"),
            CallDayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// A named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g. "Thanksgiving").
    pub name: String,
}

/// A provider assigned to cover one tier on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierAssignment {
    /// The tier being covered.
    pub tier_id: String,
    /// The provider covering it.
    pub provider_id: String,
}

/// One calendar day in a call schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDayAssignment {
    /// The calendar date.
    pub date: NaiveDate,
    /// Weekday, weekend, or holiday.
    #[serde(rename = "type")]
    pub day_type: CallDayType,
    /// Tier assignments for the day. Empty when nobody is on call.
    #[serde(default)]
    pub tier_assignments: Vec<TierAssignment>,
}

impl CallDayAssignment {
    /// Creates a day with no assignments.
    pub fn unassigned(date: NaiveDate, day_type: CallDayType) -> Self {
        Self {
            date,
            day_type,
            tier_assignments: Vec::new(),
        }
    }

    /// Returns true if the given provider covers any tier on this day.
    pub fn is_assigned_to(&self, provider_id: &str) -> bool {
        self.tier_assignments
            .iter()
            .any(|a| a.provider_id == provider_id)
    }
}

/// A full-year call calendar.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::generate_base_calendar;
/// use call_budget_engine::models::CallSchedule;
///
/// let schedule = CallSchedule {
///     year: 2024,
///     assignments: generate_base_calendar(2024, &[]),
/// };
/// assert_eq!(schedule.assignments.len(), 366);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSchedule {
    /// The calendar year.
    pub year: i32,
    /// One entry per day of the year, in date order.
    pub assignments: Vec<CallDayAssignment>,
}

impl CallSchedule {
    /// Looks up the entry for a specific date.
    ///
    /// Does not rely on date order, so schedules built or edited elsewhere
    /// are searched in full.
    pub fn day(&self, date: NaiveDate) -> Option<&CallDayAssignment> {
        self.assignments.iter().find(|d| d.date == date)
    }

    /// Returns every day the given provider is on call.
    pub fn assignments_for<'a>(
        &'a self,
        provider_id: &'a str,
    ) -> impl Iterator<Item = &'a CallDayAssignment> + 'a {
        self.assignments
            .iter()
            .filter(move |d| d.is_assigned_to(provider_id))
    }

    /// Counts calendar days by type.
    pub fn count_by_type(&self) -> HashMap<CallDayType, usize> {
        let mut counts = HashMap::new();
        for day in &self.assignments {
            *counts.entry(day.day_type).or_insert(0) += 1;
        }
        counts
    }

    /// Total number of tier assignments across the year.
    pub fn total_assignments(&self) -> usize {
        self.assignments
            .iter()
            .map(|d| d.tier_assignments.len())
            .sum()
    }
}
