//! Calendar construction and day classification.
//!
//! Every date of a year is classified as a holiday, weekend, or weekday, in
//! that order of precedence. A holiday falling on a Saturday is a holiday.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::models::{CallDayAssignment, CallDayType};

/// Determines the call day type for a date.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::classify_day;
/// use call_budget_engine::models::CallDayType;
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// let july_4 = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(); // a Saturday
/// let holidays: HashSet<NaiveDate> = [july_4].into_iter().collect();
///
/// assert_eq!(classify_day(july_4, &holidays), CallDayType::Holiday);
/// assert_eq!(classify_day(july_4, &HashSet::new()), CallDayType::Weekend);
/// ```
pub fn classify_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> CallDayType {
    if holidays.contains(&date) {
        return CallDayType::Holiday;
    }
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => CallDayType::Weekend,
        _ => CallDayType::Weekday,
    }
}

/// Builds an unassigned calendar covering every day of `year`.
///
/// Holiday dates outside `year` are ignored. A year chrono cannot represent
/// yields an empty calendar.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::generate_base_calendar;
///
/// assert_eq!(generate_base_calendar(2024, &[]).len(), 366);
/// assert_eq!(generate_base_calendar(2023, &[]).len(), 365);
/// ```
pub fn generate_base_calendar(year: i32, holidays: &[NaiveDate]) -> Vec<CallDayAssignment> {
    let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        warn!(year, "Year is outside the supported calendar range");
        return Vec::new();
    };

    let holiday_set: HashSet<NaiveDate> = holidays.iter().copied().collect();

    start
        .iter_days()
        .take_while(|date| date.year() == year)
        .map(|date| CallDayAssignment::unassigned(date, classify_day(date, &holiday_set)))
        .collect()
}

/// Returns the number of days in `year` under the Gregorian leap-year rule.
pub fn days_in_year(year: i32) -> u32 {
    if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
        366
    } else {
        365
    }
}
