//! Hiring model.
//!
//! This module defines the Hiring struct, the central record that ties an
//! employee to a restaurant and anchors all tenure calculations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TenureError, TenureResult};

/// Represents an employment contract between an employee and a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hiring {
    /// Unique identifier for the hiring.
    pub id: String,
    /// The employee holding the contract.
    pub employee_id: String,
    /// The restaurant where the contract was signed.
    pub restaurant_id: String,
    /// The department the employee works in.
    pub department_id: String,
    /// The first day of employment. Legacy records may lack one, and such
    /// hirings are skipped by alert runs.
    pub start_date: Option<NaiveDate>,
    /// The last day of employment, if the contract has ended.
    pub termination_date: Option<NaiveDate>,
}

impl Hiring {
    /// Returns true while the contract has no termination date.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenure_engine::models::Hiring;
    /// use chrono::NaiveDate;
    ///
    /// let hiring = Hiring {
    ///     id: "hir_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     restaurant_id: "res_001".to_string(),
    ///     department_id: "dep_kitchen".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
    ///     termination_date: None,
    /// };
    /// assert!(hiring.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.termination_date.is_none()
    }

    /// Validates this hiring before it is admitted into a store.
    ///
    /// A hiring must name a department, carry a start date, and must not
    /// duplicate an existing contract for the same employee in the same
    /// restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`TenureError::InvalidHiring`] when the department is blank,
    /// [`TenureError::MissingStartDate`] when no start date is set, and
    /// [`TenureError::DuplicateContract`] when the employee already holds a
    /// contract in the restaurant.
    pub fn validate_new(&self, existing: &[Hiring]) -> TenureResult<()> {
        if self.department_id.trim().is_empty() {
            return Err(TenureError::InvalidHiring {
                hiring_id: self.id.clone(),
                message: "department is required".to_string(),
            });
        }

        if self.start_date.is_none() {
            return Err(TenureError::MissingStartDate {
                hiring_id: self.id.clone(),
            });
        }

        let duplicate = existing.iter().any(|other| {
            other.id != self.id
                && other.employee_id == self.employee_id
                && other.restaurant_id == self.restaurant_id
        });
        if duplicate {
            return Err(TenureError::DuplicateContract {
                employee_id: self.employee_id.clone(),
                restaurant_id: self.restaurant_id.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_hiring(id: &str, employee_id: &str, restaurant_id: &str) -> Hiring {
        Hiring {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            department_id: "dep_kitchen".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            termination_date: None,
        }
    }

    #[test]
    fn test_deserialize_hiring() {
        let json = r#"{
            "id": "hir_001",
            "employee_id": "emp_001",
            "restaurant_id": "res_001",
            "department_id": "dep_kitchen",
            "start_date": "2024-03-15",
            "termination_date": null
        }"#;

        let hiring: Hiring = serde_json::from_str(json).unwrap();
        assert_eq!(hiring.id, "hir_001");
        assert_eq!(hiring.employee_id, "emp_001");
        assert_eq!(hiring.restaurant_id, "res_001");
        assert_eq!(hiring.department_id, "dep_kitchen");
        assert_eq!(hiring.start_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert!(hiring.termination_date.is_none());
    }

    #[test]
    fn test_serialize_hiring_round_trip() {
        let hiring = create_test_hiring("hir_001", "emp_001", "res_001");
        let json = serde_json::to_string(&hiring).unwrap();

        let deserialized: Hiring = serde_json::from_str(&json).unwrap();
        assert_eq!(hiring, deserialized);
    }

    #[test]
    fn test_is_active_without_termination() {
        let hiring = create_test_hiring("hir_001", "emp_001", "res_001");
        assert!(hiring.is_active());
    }

    #[test]
    fn test_is_active_after_termination() {
        let mut hiring = create_test_hiring("hir_001", "emp_001", "res_001");
        hiring.termination_date = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert!(!hiring.is_active());
    }

    #[test]
    fn test_validate_new_accepts_clean_hiring() {
        let hiring = create_test_hiring("hir_001", "emp_001", "res_001");
        assert!(hiring.validate_new(&[]).is_ok());
    }

    #[test]
    fn test_validate_new_rejects_blank_department() {
        let mut hiring = create_test_hiring("hir_001", "emp_001", "res_001");
        hiring.department_id = "  ".to_string();

        match hiring.validate_new(&[]) {
            Err(TenureError::InvalidHiring { hiring_id, .. }) => {
                assert_eq!(hiring_id, "hir_001");
            }
            other => panic!("Expected InvalidHiring, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_new_rejects_missing_start_date() {
        let mut hiring = create_test_hiring("hir_001", "emp_001", "res_001");
        hiring.start_date = None;

        match hiring.validate_new(&[]) {
            Err(TenureError::MissingStartDate { hiring_id }) => {
                assert_eq!(hiring_id, "hir_001");
            }
            other => panic!("Expected MissingStartDate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_new_rejects_duplicate_contract() {
        let existing = create_test_hiring("hir_001", "emp_001", "res_001");
        let duplicate = create_test_hiring("hir_002", "emp_001", "res_001");

        match duplicate.validate_new(std::slice::from_ref(&existing)) {
            Err(TenureError::DuplicateContract {
                employee_id,
                restaurant_id,
            }) => {
                assert_eq!(employee_id, "emp_001");
                assert_eq!(restaurant_id, "res_001");
            }
            other => panic!("Expected DuplicateContract, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_new_allows_same_employee_in_other_restaurant() {
        let existing = create_test_hiring("hir_001", "emp_001", "res_001");
        let second = create_test_hiring("hir_002", "emp_001", "res_002");

        assert!(second.validate_new(std::slice::from_ref(&existing)).is_ok());
    }
}
