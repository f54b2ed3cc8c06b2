//! The tenure calculator.
//!
//! This module defines [`TenureCalculator`], the entry point for all tenure
//! queries. The calculator reads hiring records through a [`HiringStore`],
//! resolves catalog codes through a [`CatalogLoader`], and anchors every
//! date comparison on an injected reference date so runs are reproducible.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calculation::{current_employment_cycle, current_employment_half_cycle};
use crate::config::CatalogLoader;
use crate::error::{TenureError, TenureResult};
use crate::models::{DayOff, Employee, EmployeeWarning, Hiring, Restaurant};
use crate::store::HiringStore;

/// Answers tenure queries about hirings as of a reference date.
///
/// All aggregation windows are computed against `today`, so two calculators
/// built with the same store contents and the same date always agree.
///
/// # Example
///
/// ```no_run
/// use tenure_engine::config::CatalogLoader;
/// use tenure_engine::store::InMemoryHiringStore;
/// use tenure_engine::tenure::TenureCalculator;
/// use chrono::NaiveDate;
///
/// let store = InMemoryHiringStore::new();
/// let catalogs = CatalogLoader::load("./config/hr").unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
///
/// let calculator = TenureCalculator::new(&store, &catalogs, today);
/// let alerts = calculator.generate_alerts().unwrap();
/// println!("{} hirings need attention", alerts.len());
/// ```
pub struct TenureCalculator<'a> {
    store: &'a dyn HiringStore,
    catalogs: &'a CatalogLoader,
    today: NaiveDate,
}

impl<'a> TenureCalculator<'a> {
    /// Creates a calculator over a store and catalogs, anchored on `today`.
    pub fn new(store: &'a dyn HiringStore, catalogs: &'a CatalogLoader, today: NaiveDate) -> Self {
        Self {
            store,
            catalogs,
            today,
        }
    }

    /// Returns the reference date the calculator is anchored on.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub(crate) fn store(&self) -> &dyn HiringStore {
        self.store
    }

    pub(crate) fn catalogs(&self) -> &CatalogLoader {
        self.catalogs
    }

    /// Resolves the employee behind a hiring.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` when the hiring references an employee
    /// the store does not know.
    pub fn employee_for(&self, hiring: &Hiring) -> TenureResult<Employee> {
        self.store
            .employee(&hiring.employee_id)?
            .ok_or_else(|| TenureError::EmployeeNotFound {
                employee_id: hiring.employee_id.clone(),
            })
    }

    /// Resolves the restaurant behind a hiring.
    ///
    /// # Errors
    ///
    /// Returns `RestaurantNotFound` when the hiring references a restaurant
    /// the store does not know.
    pub fn restaurant_for(&self, hiring: &Hiring) -> TenureResult<Restaurant> {
        self.store
            .restaurant(&hiring.restaurant_id)?
            .ok_or_else(|| TenureError::RestaurantNotFound {
                restaurant_id: hiring.restaurant_id.clone(),
            })
    }

    /// Returns the days off taken in the current employment cycle.
    ///
    /// The cycle starts on the most recent anniversary strictly before
    /// today; days off on the anniversary itself count. A hiring without a
    /// start date has no cycle, so the result is empty.
    pub fn current_days_off(&self, hiring: &Hiring) -> TenureResult<Vec<DayOff>> {
        let Some(start_date) = hiring.start_date else {
            return Ok(Vec::new());
        };
        let cycle = current_employment_cycle(start_date, self.today);
        let days_off = self.store.days_off(&hiring.id)?;
        Ok(days_off
            .into_iter()
            .filter(|day_off| day_off.date >= cycle)
            .collect())
    }

    /// Returns the days off of one catalog type taken in the current cycle.
    ///
    /// # Errors
    ///
    /// Returns `DayOffTypeNotFound` when the code is not in the catalog.
    pub fn current_days_off_by_type(
        &self,
        hiring: &Hiring,
        type_code: &str,
    ) -> TenureResult<Vec<DayOff>> {
        self.catalogs.day_off_type(type_code)?;
        let days_off = self.current_days_off(hiring)?;
        Ok(days_off
            .into_iter()
            .filter(|day_off| day_off.day_off_type == type_code)
            .collect())
    }

    /// Returns every day off taken since the start date.
    pub fn history_days_off(&self, hiring: &Hiring) -> TenureResult<Vec<DayOff>> {
        let Some(start_date) = hiring.start_date else {
            return Ok(Vec::new());
        };
        let days_off = self.store.days_off(&hiring.id)?;
        Ok(days_off
            .into_iter()
            .filter(|day_off| day_off.date >= start_date)
            .collect())
    }

    /// Returns the warnings issued in the current half cycle.
    pub fn current_employee_warnings(&self, hiring: &Hiring) -> TenureResult<Vec<EmployeeWarning>> {
        let Some(start_date) = hiring.start_date else {
            return Ok(Vec::new());
        };
        let half_cycle = current_employment_half_cycle(start_date, self.today);
        let warnings = self.store.warnings(&hiring.id)?;
        Ok(warnings
            .into_iter()
            .filter(|warning| warning.date >= half_cycle)
            .collect())
    }

    /// Returns every warning issued since the start date.
    pub fn history_employee_warnings(&self, hiring: &Hiring) -> TenureResult<Vec<EmployeeWarning>> {
        let Some(start_date) = hiring.start_date else {
            return Ok(Vec::new());
        };
        let warnings = self.store.warnings(&hiring.id)?;
        Ok(warnings
            .into_iter()
            .filter(|warning| warning.date >= start_date)
            .collect())
    }

    /// Sums the catalog points of the warnings in the current half cycle.
    ///
    /// # Errors
    ///
    /// Returns `WarningKindNotFound` when a warning record carries a code
    /// the catalog does not know.
    pub fn current_warning_points(&self, hiring: &Hiring) -> TenureResult<i32> {
        self.sum_warning_points(self.current_employee_warnings(hiring)?)
    }

    /// Sums the catalog points of every warning since the start date.
    pub fn history_warning_points(&self, hiring: &Hiring) -> TenureResult<i32> {
        self.sum_warning_points(self.history_employee_warnings(hiring)?)
    }

    fn sum_warning_points(&self, warnings: Vec<EmployeeWarning>) -> TenureResult<i32> {
        let mut total = 0;
        for warning in &warnings {
            total += self.catalogs.warning_points(&warning.warning)?;
        }
        Ok(total)
    }

    /// Returns the distinct titles of the positions currently held under a
    /// hiring.
    pub fn active_positions(&self, hiring_id: &str) -> TenureResult<BTreeSet<String>> {
        let positions = self.store.positions(hiring_id)?;
        Ok(positions
            .into_iter()
            .filter(|position| position.is_current())
            .map(|position| position.position)
            .collect())
    }

    /// Returns the distinct titles of every position ever held under a
    /// hiring.
    pub fn position_history(&self, hiring_id: &str) -> TenureResult<BTreeSet<String>> {
        let positions = self.store.positions(hiring_id)?;
        Ok(positions
            .into_iter()
            .map(|position| position.position)
            .collect())
    }
}
