//! Call-Coverage Budget Engine
//!
//! This crate turns a roster of on-call providers, a set of payment tiers, and
//! group-level call-volume assumptions into an annual call-pay budget, a
//! per-provider burden and fairness analysis, and a concrete day-by-day call
//! calendar for a year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
