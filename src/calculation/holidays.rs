//! Default US-style holiday calendar.
//!
//! Used only when a caller supplies no explicit holiday list.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::Holiday;

/// Returns the default named holidays for `year`, in date order.
///
/// New Year's Day, Memorial Day (last Monday of May), Independence Day,
/// Labor Day (first Monday of September), Thanksgiving (fourth Thursday of
/// November), and Christmas Day.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::default_holiday_calendar;
/// use chrono::NaiveDate;
///
/// let holidays = default_holiday_calendar(2024);
/// let thanksgiving = holidays.iter().find(|h| h.name == "Thanksgiving").unwrap();
/// assert_eq!(thanksgiving.date, NaiveDate::from_ymd_opt(2024, 11, 28).unwrap());
/// ```
pub fn default_holiday_calendar(year: i32) -> Vec<Holiday> {
    [
        ("New Year's Day", NaiveDate::from_ymd_opt(year, 1, 1)),
        ("Memorial Day", last_weekday_of_month(year, 5, Weekday::Mon)),
        ("Independence Day", NaiveDate::from_ymd_opt(year, 7, 4)),
        ("Labor Day", nth_weekday_of_month(year, 9, Weekday::Mon, 1)),
        ("Thanksgiving", nth_weekday_of_month(year, 11, Weekday::Thu, 4)),
        ("Christmas Day", NaiveDate::from_ymd_opt(year, 12, 25)),
    ]
    .into_iter()
    .filter_map(|(name, date)| {
        date.map(|date| Holiday {
            date,
            name: name.to_string(),
        })
    })
    .collect()
}

/// Returns the default holiday dates for `year`.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::generate_default_holidays;
///
/// assert_eq!(generate_default_holidays(2025).len(), 6);
/// ```
pub fn generate_default_holidays(year: i32) -> Vec<NaiveDate> {
    default_holiday_calendar(year)
        .into_iter()
        .map(|h| h.date)
        .collect()
}

/// Walks back from the last day of the month to the first `weekday`.
fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let mut date = first_of_next.pred_opt()?;
    while date.weekday() != weekday {
        date = date.pred_opt()?;
    }
    Some(date)
}

/// Walks forward from the first of the month counting `weekday`s.
fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut seen = 0;
    while date.month() == month {
        if date.weekday() == weekday {
            seen += 1;
            if seen == n {
                return Some(date);
            }
        }
        date = date.succ_opt()?;
    }
    None
}
