//! Payment tier model and the percentage type used for uplifts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A percentage value such as a weekend or holiday uplift.
///
/// Kept distinct from monetary amounts so a percentage can only reach a rate
/// through [`Percentage::as_multiplier`].
///
/// # Example
///
/// ```
/// use call_budget_engine::models::Percentage;
/// use rust_decimal::Decimal;
///
/// let uplift = Percentage::new(Decimal::from(20));
/// assert_eq!(uplift.as_multiplier(), Decimal::new(12, 1));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Percentage = Percentage(Decimal::ZERO);

    /// Creates a percentage from a value in percent (20 means 20%).
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the raw value in percent.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Returns `1 + value / 100`.
    pub fn as_multiplier(self) -> Decimal {
        Decimal::ONE + self.0 / Decimal::ONE_HUNDRED
    }
}

impl From<Decimal> for Percentage {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// A compensation rule for one coverage level.
///
/// `coverage_type` and `payment_method` are free-form labels; the engine never
/// interprets them numerically.
///
/// # Example
///
/// ```
/// use call_budget_engine::models::CallTier;
/// use rust_decimal::Decimal;
///
/// let tier = CallTier::new("tier_general", Decimal::from(500));
/// assert!(tier.enabled);
/// assert_eq!(tier.weekend_uplift_pct.value(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallTier {
    /// Unique identifier for the tier.
    pub id: String,
    /// Coverage classification (e.g. "in_house", "home_call").
    #[serde(default)]
    pub coverage_type: String,
    /// Payment classification (e.g. "daily_stipend").
    #[serde(default)]
    pub payment_method: String,
    /// Weekday dollar rate per call period. All uplifts apply to this rate.
    pub base_rate: Decimal,
    /// Weekend uplift over the base rate.
    #[serde(default)]
    pub weekend_uplift_pct: Percentage,
    /// Holiday uplift over the base rate.
    #[serde(default)]
    pub holiday_uplift_pct: Percentage,
    /// Trauma uplift, compounded on top of every other rate.
    #[serde(default)]
    pub trauma_uplift_pct: Percentage,
    /// Disabled tiers are skipped when selecting the active tier.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl CallTier {
    /// Creates an enabled tier with no uplifts.
    pub fn new(id: impl Into<String>, base_rate: Decimal) -> Self {
        Self {
            id: id.into(),
            coverage_type: String::new(),
            payment_method: String::new(),
            base_rate,
            weekend_uplift_pct: Percentage::ZERO,
            holiday_uplift_pct: Percentage::ZERO,
            trauma_uplift_pct: Percentage::ZERO,
            enabled: true,
        }
    }
}
