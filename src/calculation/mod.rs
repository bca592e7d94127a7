//! Calculation logic for the Call Budget Engine.
//!
//! This module contains the three engine components: the budget engine
//! (active tier selection, uplift-adjusted rates, annual budget), the burden
//! and fairness calculator (FTE-proportional expected burden, CV-based
//! fairness score), and the schedule generator (calendar construction,
//! default holidays, weighted assignment, realized burden). Every function is
//! pure and never fails.

mod calendar;
mod call_budget;
mod expected_burden;
mod fairness;
mod holidays;
mod rates;
mod schedule;
mod schedule_burden;

pub use calendar::{classify_day, days_in_year, generate_base_calendar};
pub use call_budget::calculate_call_budget;
pub use expected_burden::calculate_expected_burden;
pub use fairness::{
    DEFAULT_CV_PENALTY_FACTOR, EMPTY_ROSTER_FAIRNESS_SCORE, burden_index,
    calculate_fairness_metrics, calculate_fairness_metrics_with, fairness_score,
};
pub use holidays::{default_holiday_calendar, generate_default_holidays};
pub use rates::{AdjustedRates, adjusted_rates, select_active_tier};
pub use schedule::{ScheduleOptions, generate_call_schedule, generate_call_schedule_with_rng};
pub use schedule_burden::{calculate_burden_from_schedule, calculate_burden_from_schedule_with};
