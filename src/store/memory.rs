//! In-memory hiring store.

use std::collections::HashMap;

use crate::error::TenureResult;
use crate::models::{DayOff, Employee, EmployeeWarning, Hiring, HiringPosition, Restaurant};

use super::{HiringStore, StoreError};

/// A [`HiringStore`] backed by in-memory collections.
///
/// Records are loaded through the `insert_*` methods before the store is
/// handed to a calculator. Hirings are validated on insert; the other
/// record kinds are accepted as given.
#[derive(Debug, Default, Clone)]
pub struct InMemoryHiringStore {
    hirings: Vec<Hiring>,
    employees: HashMap<String, Employee>,
    restaurants: HashMap<String, Restaurant>,
    days_off: Vec<DayOff>,
    warnings: Vec<EmployeeWarning>,
    positions: Vec<HiringPosition>,
}

impl InMemoryHiringStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a hiring after validating it against the existing records.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors from
    /// [`Hiring::validate_new`](crate::models::Hiring::validate_new).
    pub fn insert_hiring(&mut self, hiring: Hiring) -> TenureResult<()> {
        hiring.validate_new(&self.hirings)?;
        self.hirings.push(hiring);
        Ok(())
    }

    /// Inserts a hiring without validation.
    ///
    /// Legacy records, such as hirings that predate the start date
    /// requirement, enter the store through this method.
    pub fn insert_hiring_unchecked(&mut self, hiring: Hiring) {
        self.hirings.push(hiring);
    }

    /// Inserts or replaces an employee.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Inserts or replaces a restaurant.
    pub fn insert_restaurant(&mut self, restaurant: Restaurant) {
        self.restaurants.insert(restaurant.id.clone(), restaurant);
    }

    /// Records a day off.
    pub fn insert_day_off(&mut self, day_off: DayOff) {
        self.days_off.push(day_off);
    }

    /// Records a warning.
    pub fn insert_warning(&mut self, warning: EmployeeWarning) {
        self.warnings.push(warning);
    }

    /// Records a position.
    pub fn insert_position(&mut self, position: HiringPosition) {
        self.positions.push(position);
    }
}

impl HiringStore for InMemoryHiringStore {
    fn hirings(&self) -> Result<Vec<Hiring>, StoreError> {
        Ok(self.hirings.clone())
    }

    fn active_hirings(&self) -> Result<Vec<Hiring>, StoreError> {
        Ok(self
            .hirings
            .iter()
            .filter(|hiring| hiring.is_active())
            .cloned()
            .collect())
    }

    fn employee(&self, employee_id: &str) -> Result<Option<Employee>, StoreError> {
        Ok(self.employees.get(employee_id).cloned())
    }

    fn restaurant(&self, restaurant_id: &str) -> Result<Option<Restaurant>, StoreError> {
        Ok(self.restaurants.get(restaurant_id).cloned())
    }

    fn days_off(&self, hiring_id: &str) -> Result<Vec<DayOff>, StoreError> {
        Ok(self
            .days_off
            .iter()
            .filter(|day_off| day_off.hiring_id == hiring_id)
            .cloned()
            .collect())
    }

    fn warnings(&self, hiring_id: &str) -> Result<Vec<EmployeeWarning>, StoreError> {
        Ok(self
            .warnings
            .iter()
            .filter(|warning| warning.hiring_id == hiring_id)
            .cloned()
            .collect())
    }

    fn positions(&self, hiring_id: &str) -> Result<Vec<HiringPosition>, StoreError> {
        Ok(self
            .positions
            .iter()
            .filter(|position| position.hiring_id == hiring_id)
            .cloned()
            .collect())
    }
}
