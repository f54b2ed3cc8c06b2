//! Error types for the tenure engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during tenure tracking and
//! alert generation.

use thiserror::Error;

use crate::store::StoreError;

/// The main error type for the tenure engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tenure_engine::error::TenureError;
///
/// let error = TenureError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TenureError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A year/month/day combination does not name a real calendar date.
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// The requested day of month.
        day: u32,
    },

    /// A day-off type code was not found in the catalog.
    #[error("Day-off type not found: {code}")]
    DayOffTypeNotFound {
        /// The day-off type code that was not found.
        code: String,
    },

    /// A warning code was not found in the catalog.
    #[error("Warning kind not found: {code}")]
    WarningKindNotFound {
        /// The warning code that was not found.
        code: String,
    },

    /// A hiring referenced an employee the store does not know.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The dangling employee id.
        employee_id: String,
    },

    /// A hiring referenced a restaurant the store does not know.
    #[error("Restaurant not found: {restaurant_id}")]
    RestaurantNotFound {
        /// The dangling restaurant id.
        restaurant_id: String,
    },

    /// A hiring record was submitted without a start date.
    #[error("Hiring '{hiring_id}' has no start date")]
    MissingStartDate {
        /// The id of the incomplete hiring.
        hiring_id: String,
    },

    /// A hiring record failed onboarding validation.
    #[error("Invalid hiring '{hiring_id}': {message}")]
    InvalidHiring {
        /// The id of the invalid hiring.
        hiring_id: String,
        /// A description of what made the hiring invalid.
        message: String,
    },

    /// The employee already holds an active contract in the restaurant.
    #[error("Employee '{employee_id}' already has a contract in restaurant '{restaurant_id}'")]
    DuplicateContract {
        /// The employee with the existing contract.
        employee_id: String,
        /// The restaurant where the contract exists.
        restaurant_id: String,
    },

    /// The backing store failed to answer a query.
    #[error("Store query failed: {source}")]
    Store {
        /// The underlying store failure.
        #[from]
        source: StoreError,
    },

    /// The digest mailer refused the hand-off.
    #[error("Digest delivery failed: {message}")]
    MailDelivery {
        /// A description of the delivery failure.
        message: String,
    },
}

/// A type alias for Results that return TenureError.
pub type TenureResult<T> = Result<T, TenureError>;
