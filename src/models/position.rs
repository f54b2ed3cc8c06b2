//! Hiring position model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a position held under a hiring, such as "Line Cook".
///
/// A position without a finish date is currently held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringPosition {
    /// The hiring the position belongs to.
    pub hiring_id: String,
    /// The position title.
    pub position: String,
    /// The day the employee started in the position.
    pub started_on: NaiveDate,
    /// The day the employee left the position, if they have.
    pub finished_on: Option<NaiveDate>,
}

impl HiringPosition {
    /// Returns true while the position has no finish date.
    pub fn is_current(&self) -> bool {
        self.finished_on.is_none()
    }
}
