//! Tenure tracking for hirings.
//!
//! This module contains the [`TenureCalculator`] that answers day off,
//! warning, and position queries about a hiring, runs the alert checks
//! over the whole store, and renders the daily digest.

mod alerts;
mod calculator;
mod digest;

pub use alerts::alert_messages;
pub use calculator::TenureCalculator;
pub use digest::{DigestMailer, MailError};
