//! Group-level call-volume assumptions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Percentage;

/// Number of months used to annualize per-month call volumes.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Call-volume inputs for the whole group (not per provider).
///
/// # Example
///
/// ```
/// use call_budget_engine::models::CallAssumptions;
/// use rust_decimal::Decimal;
///
/// let assumptions = CallAssumptions::new(Decimal::from(5), Decimal::from(2), Decimal::from(10), 4);
/// assert_eq!(assumptions.total_annual_calls(), Decimal::from(94));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallAssumptions {
    /// Weekday calls per calendar month.
    pub weekday_calls_per_month: Decimal,
    /// Weekend calls per calendar month.
    pub weekend_calls_per_month: Decimal,
    /// Holiday calls per year (already annual).
    pub holidays_per_year: Decimal,
    /// Benefit load. Accepted for compatibility; no calculation reads it.
    #[serde(default)]
    pub benefit_load_pct: Percentage,
    /// The program's configured number of providers sharing call.
    ///
    /// This is a headcount and may differ from the number of eligible
    /// providers on the roster. Keeping the two consistent is the caller's job.
    #[serde(default)]
    pub providers_on_call: u32,
}

impl CallAssumptions {
    /// Creates assumptions with no benefit load.
    pub fn new(
        weekday_calls_per_month: Decimal,
        weekend_calls_per_month: Decimal,
        holidays_per_year: Decimal,
        providers_on_call: u32,
    ) -> Self {
        Self {
            weekday_calls_per_month,
            weekend_calls_per_month,
            holidays_per_year,
            benefit_load_pct: Percentage::ZERO,
            providers_on_call,
        }
    }

    /// Weekday calls per year, saturating at `Decimal::MAX`.
    pub fn annual_weekday_calls(&self) -> Decimal {
        self.weekday_calls_per_month
            .saturating_mul(Decimal::from(MONTHS_PER_YEAR))
    }

    /// Weekend calls per year, saturating at `Decimal::MAX`.
    pub fn annual_weekend_calls(&self) -> Decimal {
        self.weekend_calls_per_month
            .saturating_mul(Decimal::from(MONTHS_PER_YEAR))
    }

    /// Holiday calls per year.
    pub fn annual_holiday_calls(&self) -> Decimal {
        self.holidays_per_year
    }

    /// Total calls per year across all day types, saturating at `Decimal::MAX`.
    pub fn total_annual_calls(&self) -> Decimal {
        self.annual_weekday_calls()
            .saturating_add(self.annual_weekend_calls())
            .saturating_add(self.annual_holiday_calls())
    }

    /// Weekday, weekend, and holiday calls per year, or `None` if any
    /// annual volume or their sum is outside the `Decimal` range.
    pub fn checked_annual_calls(&self) -> Option<(Decimal, Decimal, Decimal)> {
        let months = Decimal::from(MONTHS_PER_YEAR);
        let weekday = self.weekday_calls_per_month.checked_mul(months)?;
        let weekend = self.weekend_calls_per_month.checked_mul(months)?;
        weekday
            .checked_add(weekend)?
            .checked_add(self.holidays_per_year)?;
        Some((weekday, weekend, self.holidays_per_year))
    }
}
