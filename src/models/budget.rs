//! Budget result models.
//!
//! [`BudgetResult`] carries the headline budget figures plus an optional
//! [`BudgetBreakdown`] of the intermediate values, and a [`BudgetDiagnostic`]
//! when the budget could not be computed for this input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why a budget came back as all zeros.
///
/// # Example
///
/// ```
/// use call_budget_engine::models::BudgetDiagnostic;
///
/// assert_eq!(BudgetDiagnostic::NoTierAvailable.to_string(), "No tier available");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetDiagnostic {
    /// The tier list was empty.
    NoTierAvailable,
    /// No provider on the roster is eligible for call.
    NoEligibleProviders,
    /// The configured providers-on-call headcount is zero.
    NoProvidersOnCall,
    /// A rate, volume, or total fell outside the `Decimal` range.
    AmountOutOfRange,
}

impl std::fmt::Display for BudgetDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetDiagnostic::NoTierAvailable => write!(f, "No tier available"),
            BudgetDiagnostic::NoEligibleProviders => write!(f, "No eligible providers"),
            BudgetDiagnostic::NoProvidersOnCall => write!(f, "No providers on call"),
            BudgetDiagnostic::AmountOutOfRange => write!(f, "Budget amount out of range"),
        }
    }
}

/// Intermediate values behind a budget, useful for debugging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    /// The tier the budget was priced against.
    pub active_tier_id: String,
    /// Weekday, weekend, and holiday calls per year combined.
    pub total_annual_calls: Decimal,
    /// Weekday calls per year.
    pub weekday_calls_per_year: Decimal,
    /// Weekend calls per year.
    pub weekend_calls_per_year: Decimal,
    /// Holiday calls per year.
    pub holiday_calls_per_year: Decimal,
    /// Weekday rate after the trauma uplift.
    pub weekday_rate: Decimal,
    /// Weekend rate after weekend and trauma uplifts.
    pub weekend_rate: Decimal,
    /// Holiday rate after holiday and trauma uplifts.
    pub holiday_rate: Decimal,
    /// Sum of FTE across eligible providers.
    pub total_eligible_fte: Decimal,
    /// Number of eligible providers on the roster.
    pub eligible_provider_count: usize,
    /// The configured providers-on-call headcount used as the divisor.
    pub providers_on_call: u32,
}

/// The annual call-pay budget for a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResult {
    /// Total annual call budget for the group.
    pub total_annual_call_budget: Decimal,
    /// Annual call pay for one provider on call.
    pub avg_call_pay_per_provider: Decimal,
    /// Total budget divided by the eligible FTE.
    pub call_pay_per_fte: Decimal,
    /// Total budget divided by total annual calls.
    pub effective_per_24h: Decimal,
    /// Same as `effective_per_24h`; one call is one 24h period.
    pub effective_per_call: Decimal,
    /// Set when the budget could not be computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BudgetDiagnostic>,
    /// Intermediate values, present when the budget was computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BudgetBreakdown>,
}

impl BudgetResult {
    /// Returns an all-zero result tagged with a diagnostic.
    pub fn zeroed(diagnostic: BudgetDiagnostic) -> Self {
        Self {
            total_annual_call_budget: Decimal::ZERO,
            avg_call_pay_per_provider: Decimal::ZERO,
            call_pay_per_fte: Decimal::ZERO,
            effective_per_24h: Decimal::ZERO,
            effective_per_call: Decimal::ZERO,
            error: Some(diagnostic),
            breakdown: None,
        }
    }

    /// Returns true if the budget was computed without a diagnostic.
    pub fn is_computed(&self) -> bool {
        self.error.is_none()
    }
}
