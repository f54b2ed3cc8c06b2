//! Tenure Engine for restaurant hiring records
//!
//! This crate tracks employment tenure for restaurant hirings and derives
//! the alerts the back office acts on: upcoming anniversaries, missing
//! onboarding paperwork, health insurance enrollment windows, and expiring
//! work visas. It also aggregates days off, disciplinary warning points,
//! and position history over the employment cycles each hiring defines.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tenure;
