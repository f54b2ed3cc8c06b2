//! Day off model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single day off taken under a hiring.
///
/// The type code refers to an entry in the day off type catalog, such as
/// `"vacation"` or `"sick"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOff {
    /// The hiring the day off was taken under.
    pub hiring_id: String,
    /// The calendar day taken off.
    pub date: NaiveDate,
    /// The catalog code of the day off type.
    pub day_off_type: String,
}
