//! Expected call burden per provider.
//!
//! Annual call volume is allocated to eligible providers in proportion to
//! their FTE share. The burden index compares each provider to the average
//! per head, so a provider with less FTE than average lands below zero.

use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::models::{CallAssumptions, CallProvider, ProviderBurdenResult, eligible_providers};

use super::burden_index;

/// Calculates each eligible provider's expected annual call burden.
///
/// Returns an empty list when no provider is eligible. When the eligible FTE
/// sums to zero, every provider gets zero expected calls and a zero burden
/// index.
///
/// # Arguments
///
/// * `providers` - The provider roster, including ineligible providers
/// * `assumptions` - Group-level call volumes
///
/// # Returns
///
/// One [`ProviderBurdenResult`] per eligible provider, in roster order.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::calculate_expected_burden;
/// use call_budget_engine::models::{CallAssumptions, CallProvider};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let providers = vec![
///     CallProvider::new("dr_a", Decimal::ONE, "tier_general"),
///     CallProvider::new("dr_b", Decimal::from_str("0.5").unwrap(), "tier_general"),
///     CallProvider::new("dr_c", Decimal::ONE, "tier_general"),
/// ];
/// let assumptions = CallAssumptions::new(Decimal::from(5), Decimal::from(2), Decimal::from(10), 3);
///
/// let results = calculate_expected_burden(&providers, &assumptions);
/// assert!(results[0].burden_index > 0.0);
/// assert!(results[1].burden_index < 0.0);
/// assert!(results[2].burden_index > 0.0);
/// ```
pub fn calculate_expected_burden(
    providers: &[CallProvider],
    assumptions: &CallAssumptions,
) -> Vec<ProviderBurdenResult> {
    let eligible = eligible_providers(providers);
    if eligible.is_empty() {
        debug!("No eligible providers for burden calculation");
        return Vec::new();
    }

    let weekday_total = assumptions.annual_weekday_calls().to_f64().unwrap_or(0.0);
    let weekend_total = assumptions.annual_weekend_calls().to_f64().unwrap_or(0.0);
    let holiday_total = assumptions.annual_holiday_calls().to_f64().unwrap_or(0.0);
    let total_calls = weekday_total + weekend_total + holiday_total;

    let total_eligible_fte: f64 = eligible.iter().map(|p| p.fte_as_f64()).sum();

    if total_eligible_fte <= 0.0 {
        debug!(
            eligible_count = eligible.len(),
            "Eligible FTE is zero; no burden allocated"
        );
        return eligible
            .iter()
            .map(|p| ProviderBurdenResult {
                provider_id: p.id.clone(),
                fte: p.fte_as_f64(),
                expected_weekday_calls: 0.0,
                expected_weekend_calls: 0.0,
                expected_holiday_calls: 0.0,
                total_expected_calls: 0.0,
                burden_index: 0.0,
            })
            .collect();
    }

    // Average per head, not per FTE
    let group_average_calls = total_calls / eligible.len() as f64;

    eligible
        .iter()
        .map(|p| {
            let fte = p.fte_as_f64();
            let share = fte / total_eligible_fte;
            let expected_weekday_calls = weekday_total * share;
            let expected_weekend_calls = weekend_total * share;
            let expected_holiday_calls = holiday_total * share;
            let total_expected_calls =
                expected_weekday_calls + expected_weekend_calls + expected_holiday_calls;

            ProviderBurdenResult {
                provider_id: p.id.clone(),
                fte,
                expected_weekday_calls,
                expected_weekend_calls,
                expected_holiday_calls,
                total_expected_calls,
                burden_index: burden_index(total_expected_calls, group_average_calls),
            }
        })
        .collect()
}
