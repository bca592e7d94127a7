//! Burden and fairness result models.

use serde::{Deserialize, Serialize};

/// Expected annual call burden for one eligible provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderBurdenResult {
    /// The provider this burden belongs to.
    pub provider_id: String,
    /// The provider's FTE.
    pub fte: f64,
    /// Expected weekday calls per year.
    pub expected_weekday_calls: f64,
    /// Expected weekend calls per year.
    pub expected_weekend_calls: f64,
    /// Expected holiday calls per year.
    pub expected_holiday_calls: f64,
    /// Sum of the three expected call counts.
    pub total_expected_calls: f64,
    /// Signed percentage deviation from the group average.
    pub burden_index: f64,
}

/// Group-level summary of how evenly call burden is spread.
///
/// `group_average_calls` and `average_calls` always hold the same value; both
/// names are serialized for consumers that read either one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessSummary {
    /// Mean calls per provider.
    pub group_average_calls: f64,
    /// Alias of `group_average_calls`.
    pub average_calls: f64,
    /// Smallest per-provider call count.
    pub min_calls: f64,
    /// Largest per-provider call count.
    pub max_calls: f64,
    /// Population standard deviation of per-provider call counts.
    pub standard_deviation: f64,
    /// 0 to 100, where 100 is perfectly even.
    pub fairness_score: f64,
    /// Sum of FTE across the summarized providers.
    pub total_eligible_fte: f64,
    /// Number of providers summarized.
    pub eligible_provider_count: usize,
}

/// Realized call counts for one provider in a generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledProviderBurden {
    /// The provider these counts belong to.
    pub provider_id: String,
    /// The provider's FTE.
    pub fte: f64,
    /// Assigned weekday calls.
    pub weekday_calls: u32,
    /// Assigned weekend calls.
    pub weekend_calls: u32,
    /// Assigned holiday calls.
    pub holiday_calls: u32,
    /// Sum of the three counts.
    pub total_calls: u32,
    /// Signed percentage deviation from the group average.
    pub burden_index: f64,
}

/// Per-provider realized burden plus the group fairness summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBurden {
    /// One entry per eligible provider, in roster order.
    pub results: Vec<ScheduledProviderBurden>,
    /// Fairness summary over `results`.
    pub summary: FairnessSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fairness_summary_serializes_both_average_names() {
        let summary = FairnessSummary {
            group_average_calls: 23.5,
            average_calls: 23.5,
            min_calls: 23.5,
            max_calls: 23.5,
            standard_deviation: 0.0,
            fairness_score: 100.0,
            total_eligible_fte: 4.0,
            eligible_provider_count: 4,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["group_average_calls"], 23.5);
        assert_eq!(json["average_calls"], 23.5);
        assert_eq!(json["eligible_provider_count"], 4);
    }
}
