//! Employee model.
//!
//! This module defines the Employee struct with the onboarding paperwork
//! flags and benefit elections that drive alert generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee tracked by the tenure engine.
///
/// The paperwork flags default to false when absent from serialized input,
/// so an employee record that never mentions a document reads as missing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name as printed on the digest.
    pub full_name: String,
    /// Whether a W4 form is on file.
    #[serde(default)]
    pub has_w4: bool,
    /// Whether a copy of the social security card is on file.
    #[serde(default)]
    pub has_ssn_copy: bool,
    /// Whether a copy of a photo ID is on file.
    #[serde(default)]
    pub has_id_copy: bool,
    /// Whether the employee opted into the benefits program.
    #[serde(default)]
    pub opted_into_benefits: bool,
    /// Whether the employee already holds health insurance.
    #[serde(default)]
    pub has_health_insurance: bool,
    /// The expiry date of the employee's work visa, if they hold one.
    #[serde(default)]
    pub visa_expiry_date: Option<NaiveDate>,
}
