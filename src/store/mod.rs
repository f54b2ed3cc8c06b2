//! Storage abstraction for hiring records.
//!
//! This module defines the [`HiringStore`] trait the tenure calculator reads
//! through, so alert runs can be exercised against any backing store, and an
//! in-memory implementation for tests and small deployments.

use thiserror::Error;

use crate::models::{DayOff, Employee, EmployeeWarning, Hiring, HiringPosition, Restaurant};

mod memory;

pub use memory::InMemoryHiringStore;

/// Error enumeration for store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction so the tenure calculator can be exercised in
/// isolation.
///
/// All queries are reads; the calculator never writes through this trait.
pub trait HiringStore: Send + Sync {
    /// Returns every hiring on record, terminated ones included.
    fn hirings(&self) -> Result<Vec<Hiring>, StoreError>;

    /// Returns the hirings with no termination date.
    fn active_hirings(&self) -> Result<Vec<Hiring>, StoreError>;

    /// Looks up an employee by id.
    fn employee(&self, employee_id: &str) -> Result<Option<Employee>, StoreError>;

    /// Looks up a restaurant by id.
    fn restaurant(&self, restaurant_id: &str) -> Result<Option<Restaurant>, StoreError>;

    /// Returns the days off recorded under a hiring.
    fn days_off(&self, hiring_id: &str) -> Result<Vec<DayOff>, StoreError>;

    /// Returns the warnings issued under a hiring.
    fn warnings(&self, hiring_id: &str) -> Result<Vec<EmployeeWarning>, StoreError>;

    /// Returns the positions held under a hiring.
    fn positions(&self, hiring_id: &str) -> Result<Vec<HiringPosition>, StoreError>;
}
