//! Daily digest rendering and delivery.
//!
//! This module renders the plain text digest the back office receives each
//! morning and defines the [`DigestMailer`] trait the delivery hand-off
//! goes through.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{TenureError, TenureResult};
use crate::models::DigestReport;

use super::calculator::TenureCalculator;

/// Trait describing outbound digest delivery (e.g., SMTP or chat adapters).
pub trait DigestMailer: Send + Sync {
    /// Hands a rendered digest to the transport.
    fn deliver(&self, report: &DigestReport) -> Result<(), MailError>;
}

/// Mail dispatch error.
#[derive(Debug, Error)]
pub enum MailError {
    /// The mail transport could not be reached.
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}

impl TenureCalculator<'_> {
    /// Renders the daily digest body from a fresh alert run.
    ///
    /// Each alerted hiring contributes a block: the employee's full name,
    /// the restaurant name, the alert lines, and, when the hiring has days
    /// off in the current cycle, one count line per catalog day off type.
    /// Every line ends in `" \r\n"` and blocks are separated by a bare
    /// `"\r\n"`. A run with no alerts still produces a report with an
    /// empty body.
    ///
    /// # Errors
    ///
    /// Returns a `Store` error when the underlying alert run cannot list
    /// hirings; entries whose employee, restaurant, or day off lookups
    /// fail are logged and skipped.
    pub fn daily_digest(&self) -> TenureResult<DigestReport> {
        let digest_id = Uuid::new_v4();
        let alerts = self.generate_alerts()?;

        let mut body = String::new();
        let mut entries = 0;

        for entry in &alerts {
            let hiring = &entry.hiring;

            let employee = match self.employee_for(hiring) {
                Ok(employee) => employee,
                Err(err) => {
                    warn!(
                        digest_id = %digest_id,
                        hiring_id = %hiring.id,
                        error = %err,
                        "Employee lookup failed, skipping digest entry"
                    );
                    continue;
                }
            };
            let restaurant = match self.restaurant_for(hiring) {
                Ok(restaurant) => restaurant,
                Err(err) => {
                    warn!(
                        digest_id = %digest_id,
                        hiring_id = %hiring.id,
                        error = %err,
                        "Restaurant lookup failed, skipping digest entry"
                    );
                    continue;
                }
            };
            // Fetched before any line renders; a skip must not leave a
            // half-written block behind.
            let current_days_off = match self.current_days_off(hiring) {
                Ok(days_off) => days_off,
                Err(err) => {
                    warn!(
                        digest_id = %digest_id,
                        hiring_id = %hiring.id,
                        error = %err,
                        "Day off lookup failed, skipping digest entry"
                    );
                    continue;
                }
            };

            body.push_str(&employee.full_name);
            body.push_str(" \r\n");
            body.push_str(&restaurant.name);
            body.push_str(" \r\n");
            for message in &entry.messages {
                body.push_str(&message.to_string());
                body.push_str(" \r\n");
            }

            if !current_days_off.is_empty() {
                for day_off_type in self.catalogs().day_off_types() {
                    let count = current_days_off
                        .iter()
                        .filter(|day_off| day_off.day_off_type == day_off_type.code)
                        .count();
                    body.push_str(&format!("{}: {} \r\n", day_off_type.name, count));
                }
            }
            body.push_str("\r\n");
            entries += 1;
        }

        info!(
            digest_id = %digest_id,
            entries,
            "Daily digest rendered"
        );

        Ok(DigestReport {
            digest_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            entries,
            body,
        })
    }

    /// Renders the daily digest and hands it to the mailer.
    ///
    /// The digest is delivered even when no hiring raised an alert, so the
    /// back office can tell a quiet day from a broken run.
    ///
    /// # Errors
    ///
    /// Returns `MailDelivery` when the mailer refuses the report, besides
    /// the errors [`daily_digest`](Self::daily_digest) can raise.
    pub fn deliver_daily_digest(&self, mailer: &dyn DigestMailer) -> TenureResult<DigestReport> {
        let report = self.daily_digest()?;

        mailer
            .deliver(&report)
            .map_err(|e| TenureError::MailDelivery {
                message: e.to_string(),
            })?;

        info!(
            digest_id = %report.digest_id,
            entries = report.entries,
            "Daily digest delivered"
        );
        Ok(report)
    }
}
