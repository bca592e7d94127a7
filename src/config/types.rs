//! Configuration types for the Call Budget Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the engine's YAML configuration file. Every section
//! is optional; missing sections take their defaults.

use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_CV_PENALTY_FACTOR;

/// Identifying information about an engine deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the call program or deployment.
    pub name: String,
    /// Version or effective date of the configuration.
    pub version: String,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            name: "Call Budget Engine".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Fairness scoring settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessConfig {
    /// Multiplier applied to the coefficient of variation before it is
    /// subtracted from a perfect score.
    #[serde(default = "default_cv_penalty_factor")]
    pub cv_penalty_factor: f64,
}

fn default_cv_penalty_factor() -> f64 {
    DEFAULT_CV_PENALTY_FACTOR
}

impl Default for FairnessConfig {
    fn default() -> Self {
        Self {
            cv_penalty_factor: DEFAULT_CV_PENALTY_FACTOR,
        }
    }
}

/// Schedule generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Seed for reproducible schedules. `None` draws from the system RNG.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whether to fall back to the default holiday calendar when a request
    /// supplies no holidays.
    #[serde(default = "default_use_default_holidays")]
    pub use_default_holidays: bool,
}

fn default_use_default_holidays() -> bool {
    true
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            use_default_holidays: true,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Deployment metadata.
    #[serde(default)]
    pub engine: EngineMetadata,
    /// Fairness scoring settings.
    #[serde(default)]
    pub fairness: FairnessConfig,
    /// Schedule generation settings.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}
