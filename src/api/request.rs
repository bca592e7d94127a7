//! Request types for the Call Budget Engine API.
//!
//! These mirror the records a planning UI collects. Field names follow the
//! UI (`weekday_rate` rather than `base_rate`); conversion into the engine's
//! domain types happens through the `From` impls and [`resolve_providers_on_call`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CallAssumptions, CallProvider, CallTier, Percentage};

/// A payment tier as entered in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRequest {
    /// Unique identifier for the tier.
    pub id: String,
    /// Coverage classification label.
    #[serde(default)]
    pub coverage_type: String,
    /// Payment classification label.
    #[serde(default)]
    pub payment_method: String,
    /// Weekday dollar rate per call period.
    pub weekday_rate: Decimal,
    /// Weekend uplift in percent.
    #[serde(default)]
    pub weekend_uplift_pct: Option<Decimal>,
    /// Holiday uplift in percent.
    #[serde(default)]
    pub holiday_uplift_pct: Option<Decimal>,
    /// Trauma uplift in percent.
    #[serde(default)]
    pub trauma_uplift_pct: Option<Decimal>,
    /// Whether the tier may be selected as the active tier.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// A roster entry as entered in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// Unique identifier for the provider.
    pub id: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Full-time equivalent.
    pub fte: Decimal,
    /// The tier the provider is billed under.
    #[serde(default)]
    pub tier_id: String,
    /// Whether the provider takes call. Defaults to true.
    #[serde(default)]
    pub eligible_for_call: Option<bool>,
}

/// Group-level call context as entered in the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallContextRequest {
    /// Weekday calls per calendar month.
    pub weekday_calls_per_month: Decimal,
    /// Weekend calls per calendar month.
    pub weekend_calls_per_month: Decimal,
    /// Holiday calls per year.
    pub holidays_per_year: Decimal,
    /// Benefit load in percent. Carried through, never used.
    #[serde(default)]
    pub benefit_load_pct: Option<Decimal>,
    /// Explicit count of providers sharing call. Only used when no roster
    /// entry is eligible.
    #[serde(default)]
    pub providers_on_call: Option<u32>,
}

/// Request body for `POST /budget`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    /// Payment tiers, in priority order.
    pub tiers: Vec<TierRequest>,
    /// The provider roster.
    pub providers: Vec<ProviderRequest>,
    /// Call-volume context.
    pub context: CallContextRequest,
}

/// Request body for `POST /burden`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurdenRequest {
    /// The provider roster.
    pub providers: Vec<ProviderRequest>,
    /// Call-volume context.
    pub context: CallContextRequest,
}

/// Request body for `POST /schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Calendar year to schedule.
    pub year: i32,
    /// The provider roster.
    pub providers: Vec<ProviderRequest>,
    /// Call-volume context.
    pub context: CallContextRequest,
    /// Tier id recorded on every assignment.
    pub active_tier_id: String,
    /// Holiday dates. When absent the configured default applies.
    #[serde(default)]
    pub holidays: Option<Vec<NaiveDate>>,
    /// Seed for a reproducible schedule. Overrides the configured seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl From<TierRequest> for CallTier {
    fn from(req: TierRequest) -> Self {
        CallTier {
            id: req.id,
            coverage_type: req.coverage_type,
            payment_method: req.payment_method,
            base_rate: req.weekday_rate,
            weekend_uplift_pct: req.weekend_uplift_pct.map(Percentage::new).unwrap_or_default(),
            holiday_uplift_pct: req.holiday_uplift_pct.map(Percentage::new).unwrap_or_default(),
            trauma_uplift_pct: req.trauma_uplift_pct.map(Percentage::new).unwrap_or_default(),
            enabled: req.enabled.unwrap_or(true),
        }
    }
}

impl From<ProviderRequest> for CallProvider {
    fn from(req: ProviderRequest) -> Self {
        CallProvider {
            id: req.id,
            name: req.name,
            fte: req.fte,
            tier_id: req.tier_id,
            eligible_for_call: req.eligible_for_call.unwrap_or(true),
        }
    }
}

impl CallContextRequest {
    /// Builds engine assumptions with the given providers-on-call count.
    pub fn into_assumptions(self, providers_on_call: u32) -> CallAssumptions {
        CallAssumptions {
            weekday_calls_per_month: self.weekday_calls_per_month,
            weekend_calls_per_month: self.weekend_calls_per_month,
            holidays_per_year: self.holidays_per_year,
            benefit_load_pct: self.benefit_load_pct.map(Percentage::new).unwrap_or_default(),
            providers_on_call,
        }
    }

    /// Rejects negative call volumes.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("weekday_calls_per_month", self.weekday_calls_per_month),
            ("weekend_calls_per_month", self.weekend_calls_per_month),
            ("holidays_per_year", self.holidays_per_year),
        ];
        for (field, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidAssumption {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// Derives the providers-on-call count the budget divides by.
///
/// The eligible roster count wins; the explicit count (default 0) is only
/// used when nobody on the roster is eligible.
///
/// # Example
///
/// ```
/// use call_budget_engine::api::resolve_providers_on_call;
/// use call_budget_engine::models::CallProvider;
/// use rust_decimal::Decimal;
///
/// let mut roster = vec![
///     CallProvider::new("dr_a", Decimal::ONE, "tier_general"),
///     CallProvider::new("dr_b", Decimal::ONE, "tier_general"),
/// ];
/// assert_eq!(resolve_providers_on_call(&roster, Some(6)), 2);
///
/// roster.iter_mut().for_each(|p| p.eligible_for_call = false);
/// assert_eq!(resolve_providers_on_call(&roster, Some(6)), 6);
/// assert_eq!(resolve_providers_on_call(&roster, None), 0);
/// ```
pub fn resolve_providers_on_call(providers: &[CallProvider], explicit: Option<u32>) -> u32 {
    let eligible = providers.iter().filter(|p| p.eligible_for_call).count();
    if eligible > 0 {
        u32::try_from(eligible).unwrap_or(u32::MAX)
    } else {
        explicit.unwrap_or(0)
    }
}

/// Rejects rosters with negative FTE or duplicate ids.
pub fn validate_providers(providers: &[CallProvider]) -> EngineResult<()> {
    let mut seen = std::collections::HashSet::new();
    for provider in providers {
        if provider.fte.is_sign_negative() && !provider.fte.is_zero() {
            return Err(EngineError::InvalidProvider {
                provider_id: provider.id.clone(),
                message: format!("fte must not be negative, got {}", provider.fte),
            });
        }
        if !seen.insert(provider.id.as_str()) {
            return Err(EngineError::InvalidProvider {
                provider_id: provider.id.clone(),
                message: "duplicate provider id".to_string(),
            });
        }
    }
    Ok(())
}

/// Rejects tiers with a negative weekday rate.
pub fn validate_tiers(tiers: &[CallTier]) -> EngineResult<()> {
    for tier in tiers {
        if tier.base_rate.is_sign_negative() && !tier.base_rate.is_zero() {
            return Err(EngineError::InvalidTier {
                tier_id: tier.id.clone(),
                message: format!("weekday_rate must not be negative, got {}", tier.base_rate),
            });
        }
    }
    Ok(())
}

/// Rejects years the calendar cannot represent.
pub fn validate_year(year: i32) -> EngineResult<()> {
    let representable = NaiveDate::from_ymd_opt(year, 1, 1).is_some()
        && NaiveDate::from_ymd_opt(year, 12, 31).is_some();
    if representable {
        Ok(())
    } else {
        Err(EngineError::InvalidYear { year })
    }
}
