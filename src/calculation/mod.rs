//! Calculation logic for the Tenure Engine.
//!
//! This module contains all the date arithmetic for tracking a hiring's
//! tenure, including calendar date construction with month-end clamping,
//! employment cycle and half cycle anchoring, the anniversary reminder
//! window, the health insurance qualification window, and the work visa
//! expiry window.

mod anniversary_window;
mod calendar;
mod employment_cycle;
mod half_cycle;
mod health_qualify;
mod visa_expiry;

pub use anniversary_window::employment_anniversary_window;
pub use calendar::{build_date, shift_months};
pub use employment_cycle::{anniversary_in_year, current_employment_cycle};
pub use half_cycle::current_employment_half_cycle;
pub use health_qualify::employment_health_qualify_window;
pub use visa_expiry::employment_visa_expire_window;
