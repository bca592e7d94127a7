//! Fairness scoring over per-provider call counts.
//!
//! The fairness score is a linear penalty on the coefficient of variation
//! (CV) of call counts: `clamp(100 * (1 - CV * factor), 0, 100)`, rounded to
//! one decimal. With the default factor of 2 a CV of 0 scores 100 and a CV of
//! 0.5 or more scores 0. The same scoring applies to expected burden and to
//! burden realized from a generated schedule.

use crate::config::FairnessConfig;
use crate::models::{FairnessSummary, ProviderBurdenResult};

/// Fairness score reported when there are no providers to compare.
///
/// An empty roster is treated as perfectly fair rather than undefined.
pub const EMPTY_ROSTER_FAIRNESS_SCORE: f64 = 100.0;

/// Default multiplier applied to the coefficient of variation.
pub const DEFAULT_CV_PENALTY_FACTOR: f64 = 2.0;

const MAX_FAIRNESS_SCORE: f64 = 100.0;

/// Summarizes expected burden with the default CV penalty factor.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::{calculate_expected_burden, calculate_fairness_metrics};
/// use call_budget_engine::models::{CallAssumptions, CallProvider};
/// use rust_decimal::Decimal;
///
/// let providers: Vec<CallProvider> = (0..4)
///     .map(|i| CallProvider::new(format!("dr_{i}"), Decimal::ONE, "tier_general"))
///     .collect();
/// let assumptions = CallAssumptions::new(Decimal::from(5), Decimal::from(2), Decimal::from(10), 4);
///
/// let summary = calculate_fairness_metrics(&calculate_expected_burden(&providers, &assumptions));
/// assert_eq!(summary.fairness_score, 100.0);
/// assert_eq!(summary.group_average_calls, 23.5);
/// ```
pub fn calculate_fairness_metrics(results: &[ProviderBurdenResult]) -> FairnessSummary {
    calculate_fairness_metrics_with(results, &FairnessConfig::default())
}

/// Summarizes expected burden with a configurable CV penalty factor.
pub fn calculate_fairness_metrics_with(
    results: &[ProviderBurdenResult],
    config: &FairnessConfig,
) -> FairnessSummary {
    let calls: Vec<f64> = results.iter().map(|r| r.total_expected_calls).collect();
    let total_fte: f64 = results.iter().map(|r| r.fte).sum();
    summarize_calls(&calls, total_fte, config)
}

/// Builds a fairness summary from raw per-provider call counts.
pub(crate) fn summarize_calls(
    calls: &[f64],
    total_eligible_fte: f64,
    config: &FairnessConfig,
) -> FairnessSummary {
    if calls.is_empty() {
        return FairnessSummary {
            group_average_calls: 0.0,
            average_calls: 0.0,
            min_calls: 0.0,
            max_calls: 0.0,
            standard_deviation: 0.0,
            fairness_score: EMPTY_ROSTER_FAIRNESS_SCORE,
            total_eligible_fte: 0.0,
            eligible_provider_count: 0,
        };
    }

    let n = calls.len() as f64;
    let mean = calls.iter().sum::<f64>() / n;
    let min_calls = calls.iter().copied().fold(f64::INFINITY, f64::min);
    let max_calls = calls.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Population variance (divisor N)
    let variance = calls.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;
    let standard_deviation = variance.sqrt();

    FairnessSummary {
        group_average_calls: mean,
        average_calls: mean,
        min_calls,
        max_calls,
        standard_deviation,
        fairness_score: fairness_score(standard_deviation, mean, config.cv_penalty_factor),
        total_eligible_fte,
        eligible_provider_count: calls.len(),
    }
}

/// Scores how evenly calls are spread, from 0 (maximally uneven) to 100.
///
/// # Example
///
/// ```
/// use call_budget_engine::calculation::fairness_score;
///
/// assert_eq!(fairness_score(0.0, 20.0, 2.0), 100.0);
/// assert_eq!(fairness_score(2.0, 20.0, 2.0), 80.0);
/// assert_eq!(fairness_score(10.0, 20.0, 2.0), 0.0);
/// assert_eq!(fairness_score(5.0, 0.0, 2.0), 100.0);
/// ```
pub fn fairness_score(standard_deviation: f64, mean: f64, penalty_factor: f64) -> f64 {
    let coefficient_of_variation = if mean == 0.0 {
        0.0
    } else {
        standard_deviation / mean
    };
    let score = (MAX_FAIRNESS_SCORE * (1.0 - coefficient_of_variation * penalty_factor))
        .clamp(0.0, MAX_FAIRNESS_SCORE);
    (score * 10.0).round() / 10.0
}

/// Signed percentage deviation of `calls` from `group_average`.
///
/// Returns 0 when the group average is 0.
pub fn burden_index(calls: f64, group_average: f64) -> f64 {
    if group_average == 0.0 {
        0.0
    } else {
        (calls - group_average) / group_average * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn burden(id: &str, fte: f64, total: f64) -> ProviderBurdenResult {
        ProviderBurdenResult {
            provider_id: id.to_string(),
            fte,
            expected_weekday_calls: total,
            expected_weekend_calls: 0.0,
            expected_holiday_calls: 0.0,
            total_expected_calls: total,
            burden_index: 0.0,
        }
    }

    #[test]
    fn test_empty_input_is_perfectly_fair() {
        let summary = calculate_fairness_metrics(&[]);

        assert_eq!(summary.fairness_score, EMPTY_ROSTER_FAIRNESS_SCORE);
        assert_eq!(summary.eligible_provider_count, 0);
        assert_eq!(summary.group_average_calls, 0.0);
        assert_eq!(summary.total_eligible_fte, 0.0);
    }

    #[test]
    fn test_equal_burden_scores_100() {
        let results = vec![
            burden("a", 1.0, 31.0),
            burden("b", 1.0, 31.0),
            burden("c", 1.0, 31.0),
        ];

        let summary = calculate_fairness_metrics(&results);

        assert_eq!(summary.fairness_score, 100.0);
        assert_eq!(summary.standard_deviation, 0.0);
        assert_eq!(summary.min_calls, 31.0);
        assert_eq!(summary.max_calls, 31.0);
        assert_eq!(summary.total_eligible_fte, 3.0);
    }

    #[test]
    fn test_uneven_burden_statistics() {
        // mean 20, population std dev 10 (not the sample std dev of ~14.14)
        let results = vec![burden("a", 1.0, 10.0), burden("b", 1.0, 30.0)];

        let summary = calculate_fairness_metrics(&results);

        assert_eq!(summary.group_average_calls, 20.0);
        assert_eq!(summary.average_calls, 20.0);
        assert_eq!(summary.min_calls, 10.0);
        assert_eq!(summary.max_calls, 30.0);
        assert_eq!(summary.standard_deviation, 10.0);
        // CV 0.5 * 2 = 1.0, score floors at 0
        assert_eq!(summary.fairness_score, 0.0);
    }

    #[test]
    fn test_moderate_variation_scores_between_bounds() {
        // mean 20, std dev 2, CV 0.1, score 80
        let results = vec![burden("a", 1.0, 18.0), burden("b", 1.0, 22.0)];
        assert_eq!(calculate_fairness_metrics(&results).fairness_score, 80.0);
    }

    #[test]
    fn test_configurable_penalty_factor() {
        let results = vec![burden("a", 1.0, 18.0), burden("b", 1.0, 22.0)];
        let config = FairnessConfig {
            cv_penalty_factor: 1.0,
        };
        assert_eq!(
            calculate_fairness_metrics_with(&results, &config).fairness_score,
            90.0
        );
    }

    #[test]
    fn test_score_rounds_to_one_decimal() {
        // CV = 1/30, 100 * (1 - 2/30) = 93.333...
        assert_eq!(fairness_score(1.0, 30.0, 2.0), 93.3);
    }

    #[test]
    fn test_zero_average_scores_100() {
        let results = vec![burden("a", 0.0, 0.0), burden("b", 0.0, 0.0)];
        assert_eq!(calculate_fairness_metrics(&results).fairness_score, 100.0);
    }

    #[test]
    fn test_burden_index_sign() {
        assert_eq!(burden_index(30.0, 20.0), 50.0);
        assert_eq!(burden_index(10.0, 20.0), -50.0);
        assert_eq!(burden_index(20.0, 20.0), 0.0);
        assert_eq!(burden_index(5.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_fairness_score_is_bounded(calls in prop::collection::vec(0.0f64..500.0, 0..30)) {
            let results: Vec<ProviderBurdenResult> = calls
                .iter()
                .enumerate()
                .map(|(i, c)| burden(&format!("p{i}"), 1.0, *c))
                .collect();

            let summary = calculate_fairness_metrics(&results);

            prop_assert!(summary.fairness_score >= 0.0);
            prop_assert!(summary.fairness_score <= 100.0);
            prop_assert!(summary.min_calls <= summary.max_calls);
        }

        #[test]
        fn prop_equal_calls_score_100(value in 0.0f64..500.0, count in 1usize..30) {
            let results: Vec<ProviderBurdenResult> = (0..count)
                .map(|i| burden(&format!("p{i}"), 1.0, value))
                .collect();

            prop_assert_eq!(calculate_fairness_metrics(&results).fairness_score, 100.0);
        }
    }
}
