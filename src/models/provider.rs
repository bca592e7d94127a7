//! Provider model.
//!
//! A provider is one participant in the call program. Ineligible providers may
//! stay on the roster but are excluded from every budget and burden figure.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Represents a provider on the call roster.
///
/// # Example
///
/// ```
/// use call_budget_engine::models::CallProvider;
/// use rust_decimal::Decimal;
///
/// let provider = CallProvider::new("dr_adams", Decimal::ONE, "tier_general");
/// assert!(provider.eligible_for_call);
/// assert_eq!(provider.fte_as_f64(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallProvider {
    /// Unique, stable identifier for the provider.
    pub id: String,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full-time-equivalent commitment. Usually in [0, 1] but not capped.
    pub fte: Decimal,
    /// The payment tier this provider is billed under.
    pub tier_id: String,
    /// Whether the provider takes call at all.
    #[serde(default = "default_eligible")]
    pub eligible_for_call: bool,
}

fn default_eligible() -> bool {
    true
}

impl CallProvider {
    /// Creates an eligible, unnamed provider.
    pub fn new(id: impl Into<String>, fte: Decimal, tier_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            fte,
            tier_id: tier_id.into(),
            eligible_for_call: true,
        }
    }

    /// Returns the FTE as a float for statistical calculations.
    ///
    /// Negative values are clamped to zero.
    pub fn fte_as_f64(&self) -> f64 {
        self.fte.to_f64().unwrap_or(0.0).max(0.0)
    }
}

/// Returns the providers with `eligible_for_call` set, preserving roster order.
pub(crate) fn eligible_providers(providers: &[CallProvider]) -> Vec<&CallProvider> {
    providers.iter().filter(|p| p.eligible_for_call).collect()
}
