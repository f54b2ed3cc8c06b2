//! Employee warning model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a disciplinary warning issued under a hiring.
///
/// The warning code refers to an entry in the warning catalog, which carries
/// the point value for that kind of warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWarning {
    /// The hiring the warning was issued under.
    pub hiring_id: String,
    /// The day the warning was issued.
    pub date: NaiveDate,
    /// The catalog code of the warning kind.
    pub warning: String,
}
