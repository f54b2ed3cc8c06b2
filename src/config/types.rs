//! Configuration types for the HR catalogs.
//!
//! This module contains the strongly-typed catalog structures that are
//! deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

/// A kind of day off an employee can take.
///
/// The catalog order is the order the per-type counts appear on the daily
/// digest.
#[derive(Debug, Clone, Deserialize)]
pub struct DayOffType {
    /// The catalog code referenced by day off records (e.g., "vacation").
    pub code: String,
    /// The human-readable name printed on the digest.
    pub name: String,
}

/// Day off types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DayOffTypesConfig {
    /// The day off types in digest order.
    pub day_off_types: Vec<DayOffType>,
}

/// A kind of disciplinary warning.
#[derive(Debug, Clone, Deserialize)]
pub struct WarningKind {
    /// The human-readable name of the warning.
    pub name: String,
    /// The points the warning contributes to an employee's total.
    pub points: i32,
}

/// Warnings configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WarningsConfig {
    /// Map of warning code to warning details.
    pub warnings: HashMap<String, WarningKind>,
}

/// The complete HR catalog loaded from YAML files.
///
/// This struct aggregates the day off type and warning catalogs loaded
/// from an HR configuration directory.
#[derive(Debug, Clone)]
pub struct HrCatalog {
    /// Day off types in digest order.
    day_off_types: Vec<DayOffType>,
    /// Warning kinds by catalog code.
    warnings: HashMap<String, WarningKind>,
}

impl HrCatalog {
    /// Creates a new HrCatalog from its component parts.
    pub fn new(day_off_types: Vec<DayOffType>, warnings: HashMap<String, WarningKind>) -> Self {
        Self {
            day_off_types,
            warnings,
        }
    }

    /// Returns the day off types in digest order.
    pub fn day_off_types(&self) -> &[DayOffType] {
        &self.day_off_types
    }

    /// Returns all warning kinds.
    pub fn warnings(&self) -> &HashMap<String, WarningKind> {
        &self.warnings
    }
}
