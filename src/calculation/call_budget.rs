//! Annual call budget calculation.
//!
//! The budget divides each call type's annual volume evenly across the
//! program's configured providers-on-call headcount, prices it at the
//! uplift-adjusted rate, and scales back up to the group total. This is a
//! headcount basis. Burden analysis uses an FTE basis instead (see
//! [`calculate_expected_burden`](super::calculate_expected_burden)); the two
//! are kept separate.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    BudgetBreakdown, BudgetDiagnostic, BudgetResult, CallAssumptions, CallProvider, CallTier,
    eligible_providers,
};

use super::{adjusted_rates, select_active_tier};

/// Calculates the annual call budget for a group.
///
/// Never fails or panics. When no tier is available, no provider is eligible,
/// or the configured providers-on-call headcount is zero, an all-zero result
/// with the matching [`BudgetDiagnostic`] is returned. Inputs large enough to
/// push any intermediate amount outside the `Decimal` range give
/// [`BudgetDiagnostic::AmountOutOfRange`].
///
/// `total_annual_call_budget` always equals
/// `avg_call_pay_per_provider * providers_on_call` exactly.
///
/// # Arguments
///
/// * `tiers` - Candidate payment tiers; the active one is selected from these
/// * `providers` - The provider roster, including ineligible providers
/// * `assumptions` - Group-level call volumes and the providers-on-call headcount
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::calculate_call_budget;
/// use call_budget_engine::models::{CallAssumptions, CallProvider, CallTier};
/// use rust_decimal::Decimal;
///
/// let tiers = vec![CallTier::new("tier_general", Decimal::from(500))];
/// let providers: Vec<CallProvider> = (1..=4)
///     .map(|i| CallProvider::new(format!("dr_{i}"), Decimal::ONE, "tier_general"))
///     .collect();
/// let assumptions = CallAssumptions::new(Decimal::from(5), Decimal::from(2), Decimal::from(10), 4);
///
/// let result = calculate_call_budget(&tiers, &providers, &assumptions);
/// // 94 calls at $500 each
/// assert_eq!(result.total_annual_call_budget, Decimal::from(47_000));
/// assert_eq!(result.avg_call_pay_per_provider, Decimal::from(11_750));
/// assert_eq!(result.effective_per_24h, Decimal::from(500));
/// ```
pub fn calculate_call_budget(
    tiers: &[CallTier],
    providers: &[CallProvider],
    assumptions: &CallAssumptions,
) -> BudgetResult {
    let Some(tier) = select_active_tier(tiers) else {
        debug!("No tier available for budget");
        return BudgetResult::zeroed(BudgetDiagnostic::NoTierAvailable);
    };

    let eligible = eligible_providers(providers);
    if eligible.is_empty() {
        debug!(roster_size = providers.len(), "No eligible providers for budget");
        return BudgetResult::zeroed(BudgetDiagnostic::NoEligibleProviders);
    }

    if assumptions.providers_on_call == 0 {
        debug!(
            eligible_count = eligible.len(),
            "Providers-on-call headcount is zero"
        );
        return BudgetResult::zeroed(BudgetDiagnostic::NoProvidersOnCall);
    }

    let Some(figures) = price_calls(tier, &eligible, assumptions) else {
        warn!(
            tier_id = %tier.id,
            providers_on_call = assumptions.providers_on_call,
            "Budget amount out of range"
        );
        return BudgetResult::zeroed(BudgetDiagnostic::AmountOutOfRange);
    };

    debug!(
        tier_id = %tier.id,
        total_annual_calls = %figures.breakdown.total_annual_calls,
        total_annual_call_budget = %figures.total_annual_call_budget,
        "Calculated call budget"
    );

    BudgetResult {
        total_annual_call_budget: figures.total_annual_call_budget,
        avg_call_pay_per_provider: figures.avg_call_pay_per_provider,
        call_pay_per_fte: figures.call_pay_per_fte,
        effective_per_24h: figures.effective_per_24h,
        effective_per_call: figures.effective_per_24h,
        error: None,
        breakdown: Some(figures.breakdown),
    }
}

struct BudgetFigures {
    total_annual_call_budget: Decimal,
    avg_call_pay_per_provider: Decimal,
    call_pay_per_fte: Decimal,
    effective_per_24h: Decimal,
    breakdown: BudgetBreakdown,
}

/// Prices the annual volumes. `None` when any step overflows.
fn price_calls(
    tier: &CallTier,
    eligible: &[&CallProvider],
    assumptions: &CallAssumptions,
) -> Option<BudgetFigures> {
    let rates = adjusted_rates(tier)?;
    let providers_on_call = Decimal::from(assumptions.providers_on_call);

    let (weekday_calls_per_year, weekend_calls_per_year, holiday_calls_per_year) =
        assumptions.checked_annual_calls()?;
    let total_annual_calls = weekday_calls_per_year
        .checked_add(weekend_calls_per_year)?
        .checked_add(holiday_calls_per_year)?;

    let share = |calls: Decimal, rate: Decimal| {
        calls.checked_div(providers_on_call)?.checked_mul(rate)
    };
    let avg_call_pay_per_provider = share(weekday_calls_per_year, rates.weekday)?
        .checked_add(share(weekend_calls_per_year, rates.weekend)?)?
        .checked_add(share(holiday_calls_per_year, rates.holiday)?)?;

    let total_annual_call_budget = avg_call_pay_per_provider.checked_mul(providers_on_call)?;

    let total_eligible_fte = eligible
        .iter()
        .try_fold(Decimal::ZERO, |sum, p| sum.checked_add(p.fte))?;
    let call_pay_per_fte = if total_eligible_fte > Decimal::ZERO {
        total_annual_call_budget.checked_div(total_eligible_fte)?
    } else {
        Decimal::ZERO
    };

    let effective_per_24h = if total_annual_calls > Decimal::ZERO {
        total_annual_call_budget.checked_div(total_annual_calls)?
    } else {
        Decimal::ZERO
    };

    Some(BudgetFigures {
        total_annual_call_budget,
        avg_call_pay_per_provider,
        call_pay_per_fte,
        effective_per_24h,
        breakdown: BudgetBreakdown {
            active_tier_id: tier.id.clone(),
            total_annual_calls,
            weekday_calls_per_year,
            weekend_calls_per_year,
            holiday_calls_per_year,
            weekday_rate: rates.weekday,
            weekend_rate: rates.weekend,
            holiday_rate: rates.holiday,
            total_eligible_fte,
            eligible_provider_count: eligible.len(),
            providers_on_call: assumptions.providers_on_call,
        },
    })
}
