//! Active tier selection and uplift-adjusted rates.
//!
//! Weekend and holiday uplifts apply to the base rate. The trauma uplift then
//! compounds on top of every rate, including the weekday rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CallDayType, CallTier};

/// Per-call rates for each day type after all uplifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedRates {
    /// Weekday rate: base rate with the trauma uplift.
    pub weekday: Decimal,
    /// Weekend rate: base rate with weekend and trauma uplifts.
    pub weekend: Decimal,
    /// Holiday rate: base rate with holiday and trauma uplifts.
    pub holiday: Decimal,
}

impl AdjustedRates {
    /// Returns the rate for a given day type.
    pub fn rate_for(&self, day_type: CallDayType) -> Decimal {
        match day_type {
            CallDayType::Weekday => self.weekday,
            CallDayType::Weekend => self.weekend,
            CallDayType::Holiday => self.holiday,
        }
    }
}

/// Selects the tier a budget is priced against.
///
/// Returns the first enabled tier, or the first tier in the list when none is
/// enabled. Returns `None` only for an empty list.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::select_active_tier;
/// use call_budget_engine::models::CallTier;
/// use rust_decimal::Decimal;
///
/// let mut disabled = CallTier::new("tier_a", Decimal::from(400));
/// disabled.enabled = false;
/// let enabled = CallTier::new("tier_b", Decimal::from(500));
///
/// let tiers = vec![disabled, enabled];
/// assert_eq!(select_active_tier(&tiers).unwrap().id, "tier_b");
/// assert!(select_active_tier(&[]).is_none());
/// ```
pub fn select_active_tier(tiers: &[CallTier]) -> Option<&CallTier> {
    tiers.iter().find(|t| t.enabled).or_else(|| tiers.first())
}

/// Computes the uplift-adjusted rates for a tier.
///
/// Returns `None` if any rate falls outside the `Decimal` range.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::adjusted_rates;
/// use call_budget_engine::models::{CallTier, Percentage};
/// use rust_decimal::Decimal;
///
/// let mut tier = CallTier::new("tier_general", Decimal::from(500));
/// tier.weekend_uplift_pct = Percentage::new(Decimal::from(20));
/// tier.holiday_uplift_pct = Percentage::new(Decimal::from(50));
///
/// let rates = adjusted_rates(&tier).unwrap();
/// assert_eq!(rates.weekday, Decimal::from(500));
/// assert_eq!(rates.weekend, Decimal::from(600));
/// assert_eq!(rates.holiday, Decimal::from(750));
/// ```
pub fn adjusted_rates(tier: &CallTier) -> Option<AdjustedRates> {
    let trauma = tier.trauma_uplift_pct.as_multiplier();
    let weekend = tier
        .base_rate
        .checked_mul(tier.weekend_uplift_pct.as_multiplier())?;
    let holiday = tier
        .base_rate
        .checked_mul(tier.holiday_uplift_pct.as_multiplier())?;

    Some(AdjustedRates {
        weekday: tier.base_rate.checked_mul(trauma)?,
        weekend: weekend.checked_mul(trauma)?,
        holiday: holiday.checked_mul(trauma)?,
    })
}
