//! Core data models for the Tenure Engine.
//!
//! This module contains all the domain records used throughout the engine.

mod alert;
mod day_off;
mod employee;
mod hiring;
mod position;
mod restaurant;
mod warning;

pub use alert::{AlertMessage, DigestReport, HiringAlerts};
pub use day_off::DayOff;
pub use employee::Employee;
pub use hiring::Hiring;
pub use position::HiringPosition;
pub use restaurant::Restaurant;
pub use warning::EmployeeWarning;
