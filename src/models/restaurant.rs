//! Restaurant model.

use serde::{Deserialize, Serialize};

/// Represents a restaurant where employees hold contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique identifier for the restaurant.
    pub id: String,
    /// The restaurant name as printed on the digest.
    pub name: String,
}
