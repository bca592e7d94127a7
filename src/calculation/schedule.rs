//! Call schedule generation.
//!
//! Generation runs in four passes over a base calendar:
//!
//! 1. Annual targets per day type come from the call assumptions.
//! 2. For each day type, that many days are picked at an even stride.
//! 3. The picked days are pooled and shuffled.
//! 4. The shuffled pool is walked in order and carved into contiguous runs
//!    whose lengths follow each provider's FTE share.
//!
//! Step 3 is the only source of randomness, so a seeded RNG reproduces a
//! schedule exactly.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::models::{
    CallAssumptions, CallDayType, CallProvider, CallSchedule, TierAssignment, eligible_providers,
};

use super::{generate_base_calendar, generate_default_holidays};

/// Inputs for generating a call schedule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleOptions<'a> {
    /// The calendar year to schedule.
    pub year: i32,
    /// The provider roster, including ineligible providers.
    pub providers: &'a [CallProvider],
    /// Group-level call volumes.
    pub assumptions: &'a CallAssumptions,
    /// The tier every assignment is recorded under.
    pub active_tier_id: &'a str,
    /// Explicit holiday dates. `None` uses the default holiday calendar.
    pub holidays: Option<&'a [NaiveDate]>,
}

/// Generates a call schedule using the thread-local system RNG.
///
/// See [`generate_call_schedule_with_rng`] for a reproducible variant.
pub fn generate_call_schedule(options: &ScheduleOptions<'_>) -> CallSchedule {
    generate_call_schedule_with_rng(options, &mut rand::rng())
}

/// Generates a call schedule using the supplied RNG.
///
/// The returned schedule always covers every day of the year. It carries no
/// assignments when no provider is eligible or the eligible FTE is zero.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::{ScheduleOptions, generate_call_schedule_with_rng};
/// use call_budget_engine::models::{CallAssumptions, CallProvider};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rust_decimal::Decimal;
///
/// let providers = vec![
///     CallProvider::new("dr_a", Decimal::ONE, "tier_general"),
///     CallProvider::new("dr_b", Decimal::ONE, "tier_general"),
/// ];
/// let assumptions = CallAssumptions::new(Decimal::from(5), Decimal::from(2), Decimal::from(6), 2);
/// let options = ScheduleOptions {
///     year: 2025,
///     providers: &providers,
///     assumptions: &assumptions,
///     active_tier_id: "tier_general",
///     holidays: None,
/// };
///
/// let first = generate_call_schedule_with_rng(&options, &mut StdRng::seed_from_u64(7));
/// let second = generate_call_schedule_with_rng(&options, &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// assert_eq!(first.total_assignments(), 60 + 24 + 6);
/// ```
pub fn generate_call_schedule_with_rng<R: Rng + ?Sized>(
    options: &ScheduleOptions<'_>,
    rng: &mut R,
) -> CallSchedule {
    let holidays = match options.holidays {
        Some(explicit) => explicit.to_vec(),
        None => generate_default_holidays(options.year),
    };
    let mut days = generate_base_calendar(options.year, &holidays);

    let eligible = eligible_providers(options.providers);
    if eligible.is_empty() {
        debug!(year = options.year, "No eligible providers; schedule left unassigned");
        return CallSchedule {
            year: options.year,
            assignments: days,
        };
    }

    let Some(boundaries) = cumulative_weights(&eligible) else {
        warn!(
            year = options.year,
            eligible_count = eligible.len(),
            "Eligible FTE is zero; schedule left unassigned"
        );
        return CallSchedule {
            year: options.year,
            assignments: days,
        };
    };

    let targets = [
        (
            CallDayType::Weekday,
            options.assumptions.annual_weekday_calls(),
        ),
        (
            CallDayType::Weekend,
            options.assumptions.annual_weekend_calls(),
        ),
        (
            CallDayType::Holiday,
            options.assumptions.annual_holiday_calls(),
        ),
    ];

    let mut pool: Vec<usize> = Vec::new();
    for (day_type, target) in targets {
        let of_type: Vec<usize> = days
            .iter()
            .enumerate()
            .filter(|(_, day)| day.day_type == day_type)
            .map(|(idx, _)| idx)
            .collect();
        let selected = select_evenly_spaced(&of_type, target);
        debug!(
            %day_type,
            annual_calls = %target,
            target_days = target_day_count(target),
            available = of_type.len(),
            selected = selected.len(),
            "Selected call days"
        );
        pool.extend(selected);
    }

    pool.shuffle(rng);

    let total = pool.len();
    for (position, day_index) in pool.into_iter().enumerate() {
        let fraction = (position as f64 / total as f64) % 1.0;
        let provider = pick_provider(&eligible, &boundaries, fraction);
        days[day_index].tier_assignments.push(TierAssignment {
            tier_id: options.active_tier_id.to_string(),
            provider_id: provider.id.clone(),
        });
    }

    CallSchedule {
        year: options.year,
        assignments: days,
    }
}

/// Converts an annual call target into a whole number of days.
///
/// Fractional targets round up; zero and negative targets are zero. Targets
/// too large for `usize` saturate at `usize::MAX`.
fn target_day_count(annual_calls: Decimal) -> usize {
    if annual_calls <= Decimal::ZERO {
        return 0;
    }
    annual_calls.ceil().to_usize().unwrap_or(usize::MAX)
}

/// Picks `ceil(target)` items spread evenly across `items`.
///
/// Indices are taken at a stride of `items.len() / target`, using the
/// unrounded target, and rounded to the nearest integer. When the rounded-up
/// target reaches the number of items, every item is picked.
fn select_evenly_spaced<T: Copy>(items: &[T], target: Decimal) -> Vec<T> {
    let count = target_day_count(target);
    if count >= items.len() {
        return items.to_vec();
    }
    let Some(target) = target.to_f64().filter(|t| *t > 0.0) else {
        return Vec::new();
    };

    let stride = items.len() as f64 / target;
    (0..count)
        .filter_map(|i| items.get((i as f64 * stride).round() as usize).copied())
        .collect()
}

/// Cumulative FTE shares in roster order, ending at 1.0.
///
/// Returns `None` when the FTE total is zero.
fn cumulative_weights(providers: &[&CallProvider]) -> Option<Vec<f64>> {
    let total_fte: f64 = providers.iter().map(|p| p.fte_as_f64()).sum();
    if total_fte <= 0.0 {
        return None;
    }

    let mut running = 0.0;
    Some(
        providers
            .iter()
            .map(|p| {
                running += p.fte_as_f64() / total_fte;
                running
            })
            .collect(),
    )
}

/// Returns the first provider whose cumulative boundary exceeds `fraction`.
///
/// Falls back to the last provider with a non-zero share when rounding leaves
/// the final boundary just below `fraction`.
fn pick_provider<'a>(
    providers: &[&'a CallProvider],
    boundaries: &[f64],
    fraction: f64,
) -> &'a CallProvider {
    let index = boundaries
        .iter()
        .position(|boundary| *boundary > fraction)
        .or_else(|| providers.iter().rposition(|p| p.fte_as_f64() > 0.0))
        .unwrap_or(providers.len() - 1);
    providers[index]
}
