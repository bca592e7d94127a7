//! Core data models for the Call Budget Engine.
//!
//! This module contains the value objects the engine consumes (providers,
//! tiers, assumptions) and the results it produces (budgets, burden and
//! fairness summaries, call schedules). None of them are persisted here.

mod assumptions;
mod budget;
mod burden;
mod provider;
mod schedule;
mod tier;

pub use assumptions::{CallAssumptions, MONTHS_PER_YEAR};
pub use budget::{BudgetBreakdown, BudgetDiagnostic, BudgetResult};
pub use burden::{FairnessSummary, ProviderBurdenResult, ScheduleBurden, ScheduledProviderBurden};
pub use provider::CallProvider;
pub(crate) use provider::eligible_providers;
pub use schedule::{CallDayAssignment, CallDayType, CallSchedule, Holiday, TierAssignment};
pub use tier::{CallTier, Percentage};
