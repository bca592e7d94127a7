//! Configuration loading and management for the Call Budget Engine.
//!
//! This module loads engine settings (fairness calibration, schedule seeding,
//! holiday defaults) from a YAML file. Every setting has a default, so the
//! engine also runs without any file.
//!
//! # Example
//!
//! ```no_run
//! use call_budget_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Loaded engine: {}", loader.config().engine.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, FairnessConfig, ScheduleConfig};
