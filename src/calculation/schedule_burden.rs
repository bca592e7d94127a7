//! Realized burden from a call schedule.
//!
//! Counts each eligible provider's assignments by day type and scores the
//! spread with the same statistics used for expected burden.

use std::collections::{HashMap, HashSet};

use crate::config::FairnessConfig;
use crate::models::{
    CallDayType, CallProvider, CallSchedule, ScheduleBurden, ScheduledProviderBurden,
    eligible_providers,
};

use super::burden_index;
use super::fairness::summarize_calls;

#[derive(Debug, Default, Clone, Copy)]
struct CallTally {
    weekday: u32,
    weekend: u32,
    holiday: u32,
}

impl CallTally {
    fn record(&mut self, day_type: CallDayType) {
        match day_type {
            CallDayType::Weekday => self.weekday += 1,
            CallDayType::Weekend => self.weekend += 1,
            CallDayType::Holiday => self.holiday += 1,
        }
    }

    fn total(&self) -> u32 {
        self.weekday + self.weekend + self.holiday
    }
}

/// Calculates realized burden and fairness from a schedule.
///
/// Assignments referencing providers that are not eligible (or not on the
/// roster) are ignored. When several eligible roster entries share an id,
/// only the first is counted.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::{
///     ScheduleOptions, calculate_burden_from_schedule, generate_call_schedule,
/// };
/// use call_budget_engine::models::{CallAssumptions, CallProvider};
/// use rust_decimal::Decimal;
///
/// let providers: Vec<CallProvider> = (0..4)
///     .map(|i| CallProvider::new(format!("dr_{i}"), Decimal::ONE, "tier_general"))
///     .collect();
/// let assumptions = CallAssumptions::new(Decimal::from(5), Decimal::from(2), Decimal::from(4), 4);
/// let schedule = generate_call_schedule(&ScheduleOptions {
///     year: 2025,
///     providers: &providers,
///     assumptions: &assumptions,
///     active_tier_id: "tier_general",
///     holidays: None,
/// });
///
/// let burden = calculate_burden_from_schedule(&schedule, &providers);
/// assert_eq!(burden.results.len(), 4);
/// assert_eq!(burden.results.iter().map(|r| r.total_calls).sum::<u32>(), 88);
/// assert_eq!(burden.summary.fairness_score, 100.0);
/// ```
pub fn calculate_burden_from_schedule(
    schedule: &CallSchedule,
    providers: &[CallProvider],
) -> ScheduleBurden {
    calculate_burden_from_schedule_with(schedule, providers, &FairnessConfig::default())
}

/// Calculates realized burden with a configurable fairness penalty.
pub fn calculate_burden_from_schedule_with(
    schedule: &CallSchedule,
    providers: &[CallProvider],
    config: &FairnessConfig,
) -> ScheduleBurden {
    let mut seen = HashSet::new();
    let eligible: Vec<&CallProvider> = eligible_providers(providers)
        .into_iter()
        .filter(|p| seen.insert(p.id.as_str()))
        .collect();

    let mut tallies: HashMap<&str, CallTally> = eligible
        .iter()
        .map(|p| (p.id.as_str(), CallTally::default()))
        .collect();

    for day in &schedule.assignments {
        for assignment in &day.tier_assignments {
            if let Some(tally) = tallies.get_mut(assignment.provider_id.as_str()) {
                tally.record(day.day_type);
            }
        }
    }

    let counted: Vec<(&CallProvider, CallTally)> = eligible
        .iter()
        .map(|p| (*p, tallies.get(p.id.as_str()).copied().unwrap_or_default()))
        .collect();

    let totals: Vec<f64> = counted.iter().map(|(_, t)| f64::from(t.total())).collect();
    let total_fte: f64 = eligible.iter().map(|p| p.fte_as_f64()).sum();
    let summary = summarize_calls(&totals, total_fte, config);

    let results = counted
        .into_iter()
        .map(|(provider, tally)| ScheduledProviderBurden {
            provider_id: provider.id.clone(),
            fte: provider.fte_as_f64(),
            weekday_calls: tally.weekday,
            weekend_calls: tally.weekend,
            holiday_calls: tally.holiday,
            total_calls: tally.total(),
            burden_index: burden_index(f64::from(tally.total()), summary.group_average_calls),
        })
        .collect();

    ScheduleBurden { results, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{
        ScheduleOptions, calculate_expected_burden, calculate_fairness_metrics,
        generate_base_calendar, generate_call_schedule_with_rng,
    };
    use crate::models::{CallAssumptions, CallDayAssignment, TierAssignment};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn roster(ftes: &[&str]) -> Vec<CallProvider> {
        ftes.iter()
            .enumerate()
            .map(|(i, fte)| CallProvider::new(format!("dr_{i}"), dec(fte), "tier_general"))
            .collect()
    }

    fn assign(day: &mut CallDayAssignment, provider_id: &str) {
        day.tier_assignments.push(TierAssignment {
            tier_id: "tier_general".to_string(),
            provider_id: provider_id.to_string(),
        });
    }

    fn find_day(days: &mut [CallDayAssignment], date: NaiveDate) -> &mut CallDayAssignment {
        days.iter_mut().find(|d| d.date == date).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_counts_assignments_by_day_type() {
        let providers = roster(&["1.0", "1.0"]);
        let mut days = generate_base_calendar(2025, &[date(2025, 7, 4)]);
        // Monday, Saturday, holiday for dr_0; one Tuesday for dr_1
        assign(find_day(&mut days, date(2025, 1, 6)), "dr_0");
        assign(find_day(&mut days, date(2025, 1, 11)), "dr_0");
        assign(find_day(&mut days, date(2025, 7, 4)), "dr_0");
        assign(find_day(&mut days, date(2025, 1, 7)), "dr_1");
        let schedule = CallSchedule {
            year: 2025,
            assignments: days,
        };

        let burden = calculate_burden_from_schedule(&schedule, &providers);

        let dr_0 = &burden.results[0];
        assert_eq!(dr_0.weekday_calls, 1);
        assert_eq!(dr_0.weekend_calls, 1);
        assert_eq!(dr_0.holiday_calls, 1);
        assert_eq!(dr_0.total_calls, 3);
        assert_eq!(dr_0.burden_index, 50.0);

        let dr_1 = &burden.results[1];
        assert_eq!(dr_1.total_calls, 1);
        assert_eq!(dr_1.burden_index, -50.0);

        assert_eq!(burden.summary.group_average_calls, 2.0);
        assert_eq!(burden.summary.min_calls, 1.0);
        assert_eq!(burden.summary.max_calls, 3.0);
        assert_eq!(burden.summary.standard_deviation, 1.0);
        // CV 0.5 scores 0
        assert_eq!(burden.summary.fairness_score, 0.0);
    }

    #[test]
    fn test_ineligible_and_unknown_providers_ignored() {
        let mut providers = roster(&["1.0", "1.0"]);
        providers[1].eligible_for_call = false;
        let mut days = generate_base_calendar(2025, &[]);
        assign(find_day(&mut days, date(2025, 1, 6)), "dr_0");
        assign(find_day(&mut days, date(2025, 1, 7)), "dr_1");
        assign(find_day(&mut days, date(2025, 1, 8)), "locum");
        let schedule = CallSchedule {
            year: 2025,
            assignments: days,
        };

        let burden = calculate_burden_from_schedule(&schedule, &providers);

        assert_eq!(burden.results.len(), 1);
        assert_eq!(burden.results[0].provider_id, "dr_0");
        assert_eq!(burden.results[0].total_calls, 1);
        assert_eq!(burden.summary.eligible_provider_count, 1);
    }

    #[test]
    fn test_duplicate_roster_id_counted_once() {
        let mut providers = roster(&["1.0", "1.0"]);
        providers.push(CallProvider::new("dr_0", dec("0.5"), "tier_general"));
        let mut days = generate_base_calendar(2025, &[]);
        assign(find_day(&mut days, date(2025, 1, 6)), "dr_0");
        assign(find_day(&mut days, date(2025, 1, 7)), "dr_0");
        assign(find_day(&mut days, date(2025, 1, 8)), "dr_1");
        assign(find_day(&mut days, date(2025, 1, 9)), "dr_1");
        let schedule = CallSchedule {
            year: 2025,
            assignments: days,
        };

        let burden = calculate_burden_from_schedule(&schedule, &providers);

        assert_eq!(burden.results.len(), 2);
        assert_eq!(burden.results[0].provider_id, "dr_0");
        assert_eq!(burden.results[0].fte, 1.0);
        assert_eq!(burden.results[0].total_calls, 2);
        assert_eq!(burden.summary.eligible_provider_count, 2);
        assert_eq!(burden.summary.group_average_calls, 2.0);
        assert_eq!(burden.summary.fairness_score, 100.0);
    }

    #[test]
    fn test_provider_without_assignments_has_zero_counts() {
        let providers = roster(&["1.0", "1.0"]);
        let schedule = CallSchedule {
            year: 2025,
            assignments: generate_base_calendar(2025, &[]),
        };

        let burden = calculate_burden_from_schedule(&schedule, &providers);

        assert!(burden.results.iter().all(|r| r.total_calls == 0));
        assert!(burden.results.iter().all(|r| r.burden_index == 0.0));
        assert_eq!(burden.summary.fairness_score, 100.0);
    }

    #[test]
    fn test_no_eligible_providers_is_perfectly_fair() {
        let schedule = CallSchedule {
            year: 2025,
            assignments: generate_base_calendar(2025, &[]),
        };

        let burden = calculate_burden_from_schedule(&schedule, &[]);

        assert!(burden.results.is_empty());
        assert_eq!(burden.summary.fairness_score, 100.0);
    }

    #[test]
    fn test_realized_burden_tracks_expected_burden() {
        let providers = roster(&["1.0", "0.5", "1.0", "0.8"]);
        let assumptions = CallAssumptions::new(dec("10"), dec("4"), dec("6"), 4);
        let options = ScheduleOptions {
            year: 2026,
            providers: &providers,
            assumptions: &assumptions,
            active_tier_id: "tier_general",
            holidays: None,
        };

        let schedule = generate_call_schedule_with_rng(&options, &mut StdRng::seed_from_u64(17));
        let realized = calculate_burden_from_schedule(&schedule, &providers);
        let expected = calculate_expected_burden(&providers, &assumptions);
        let expected_summary = calculate_fairness_metrics(&expected);

        for (actual, planned) in realized.results.iter().zip(&expected) {
            assert_eq!(actual.provider_id, planned.provider_id);
            assert!((f64::from(actual.total_calls) - planned.total_expected_calls).abs() <= 1.0);
        }
        assert!((realized.summary.fairness_score - expected_summary.fairness_score).abs() < 3.0);
    }
}
