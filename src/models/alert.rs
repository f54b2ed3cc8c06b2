//! Alert models for the Tenure Engine.
//!
//! This module contains the [`AlertMessage`] type describing a single
//! finding about a hiring, the per-hiring [`HiringAlerts`] grouping, and the
//! [`DigestReport`] produced by a daily digest run.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Hiring;

/// A single alert raised for a hiring.
///
/// Each variant identifies what was found; date-bearing variants carry the
/// date the finding refers to. The [`Display`](fmt::Display) rendering is
/// the line printed on the daily digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlertMessage {
    /// The hiring's anniversary falls within the next month.
    AnniversaryUpcoming {
        /// The date of this year's anniversary.
        anniversary: NaiveDate,
    },
    /// No W4 form is on file for the employee.
    W4Missing,
    /// No copy of the social security card is on file.
    SsnCopyMissing,
    /// No copy of a photo ID is on file.
    IdCopyMissing,
    /// The employee opted into benefits, holds no health insurance, and has
    /// passed the qualification date.
    HealthEnrollmentOpen,
    /// The employee's work visa expires within a month or already expired.
    VisaExpiring {
        /// The visa expiry date.
        expires: NaiveDate,
    },
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertMessage::AnniversaryUpcoming { anniversary } => {
                write!(f, "The anniversary is on {}", anniversary)
            }
            AlertMessage::W4Missing => write!(f, "W4 required"),
            AlertMessage::SsnCopyMissing => write!(f, "Copy of SSN required"),
            AlertMessage::IdCopyMissing => write!(f, "Copy of ID required"),
            AlertMessage::HealthEnrollmentOpen => {
                write!(f, "Check to enroll for Health and/or Dental Insurance")
            }
            AlertMessage::VisaExpiring { .. } => {
                write!(f, "The work visa will expire soon or already expired")
            }
        }
    }
}

/// The alerts raised for one hiring during an alert run.
///
/// Only hirings with at least one message appear in a run's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringAlerts {
    /// The hiring the messages belong to.
    pub hiring: Hiring,
    /// The messages raised for the hiring, in check order.
    pub messages: Vec<AlertMessage>,
}

/// The outcome of a daily digest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestReport {
    /// Unique identifier for this digest run.
    pub digest_id: Uuid,
    /// When the digest was generated.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that generated the digest.
    pub engine_version: String,
    /// How many hirings contributed a block to the digest body.
    pub entries: usize,
    /// The rendered plain text digest body.
    pub body: String,
}
