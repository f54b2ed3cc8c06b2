//! Alert generation.
//!
//! This module contains the alert checks that run against each hiring and
//! the batch entry point that walks the whole store. The checks themselves
//! are pure; the batch run adds store access, skip handling, and logging.

use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    anniversary_in_year, employment_anniversary_window, employment_health_qualify_window,
    employment_visa_expire_window,
};
use crate::error::TenureResult;
use crate::models::{AlertMessage, Employee, Hiring, HiringAlerts};

use super::calculator::TenureCalculator;

/// Runs every alert check against one hiring and returns the messages that
/// fired, in check order.
///
/// The order is fixed: anniversary, W4, SSN copy, ID copy, health
/// enrollment, visa expiry. A hiring without a start date raises no
/// messages.
///
/// # Examples
///
/// ```
/// use tenure_engine::models::{AlertMessage, Employee, Hiring};
/// use tenure_engine::tenure::alert_messages;
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
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     full_name: "Maria Lopez".to_string(),
///     has_w4: false,
///     has_ssn_copy: true,
///     has_id_copy: true,
///     opted_into_benefits: false,
///     has_health_insurance: false,
///     visa_expiry_date: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let messages = alert_messages(&hiring, &employee, today);
/// assert_eq!(messages, vec![AlertMessage::W4Missing]);
/// ```
pub fn alert_messages(hiring: &Hiring, employee: &Employee, today: NaiveDate) -> Vec<AlertMessage> {
    let mut messages = Vec::new();
    let Some(start_date) = hiring.start_date else {
        return messages;
    };

    if employment_anniversary_window(start_date, today) {
        messages.push(AlertMessage::AnniversaryUpcoming {
            anniversary: anniversary_in_year(start_date, today.year()),
        });
    }
    if !employee.has_w4 {
        messages.push(AlertMessage::W4Missing);
    }
    if !employee.has_ssn_copy {
        messages.push(AlertMessage::SsnCopyMissing);
    }
    if !employee.has_id_copy {
        messages.push(AlertMessage::IdCopyMissing);
    }
    if employee.opted_into_benefits
        && !employee.has_health_insurance
        && employment_health_qualify_window(start_date, today)
    {
        messages.push(AlertMessage::HealthEnrollmentOpen);
    }
    if let Some(expires) = employee.visa_expiry_date {
        if employment_visa_expire_window(expires, today) {
            messages.push(AlertMessage::VisaExpiring { expires });
        }
    }

    messages
}

impl TenureCalculator<'_> {
    /// Runs the alert checks over every hiring on record.
    ///
    /// Terminated hirings are checked like any other; their paperwork and
    /// visa findings still matter to the back office. Hirings without a
    /// start date are skipped, as are hirings whose employee lookup fails,
    /// whether the reference dangles or the store errors. Only hirings with
    /// at least one message appear in the result, in store order.
    ///
    /// # Errors
    ///
    /// Returns a `Store` error when the hiring list itself cannot be
    /// fetched; failures scoped to a single hiring are logged and skipped.
    pub fn generate_alerts(&self) -> TenureResult<Vec<HiringAlerts>> {
        let run_id = Uuid::new_v4();
        let hirings = self.store().hirings()?;
        info!(
            run_id = %run_id,
            hirings = hirings.len(),
            "Starting alert run"
        );

        let mut results = Vec::new();
        for hiring in hirings {
            if hiring.start_date.is_none() {
                warn!(
                    run_id = %run_id,
                    hiring_id = %hiring.id,
                    "Hiring has no start date, skipping"
                );
                continue;
            }

            let employee = match self.employee_for(&hiring) {
                Ok(employee) => employee,
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        hiring_id = %hiring.id,
                        error = %err,
                        "Employee lookup failed, skipping"
                    );
                    continue;
                }
            };

            let messages = alert_messages(&hiring, &employee, self.today());
            if !messages.is_empty() {
                results.push(HiringAlerts { hiring, messages });
            }
        }

        info!(
            run_id = %run_id,
            alerted = results.len(),
            "Alert run completed"
        );
        Ok(results)
    }
}
