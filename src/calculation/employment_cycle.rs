//! Employment cycle computation.
//!
//! This module determines the boundary of the current 12-month employment
//! cycle: the most recent anniversary of an employee's hire date.

use chrono::{Datelike, NaiveDate};

use super::calendar::project_month_day;

/// Returns the hire-date anniversary falling in the given year.
///
/// The start date's month and day are projected into `year`. A February 29
/// hire date clamps to February 28 when `year` is not a leap year.
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::anniversary_in_year;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// assert_eq!(
///     anniversary_in_year(start, 2025),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
/// );
///
/// let leap_start = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(
///     anniversary_in_year(leap_start, 2025),
///     NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
/// );
/// ```
pub fn anniversary_in_year(start_date: NaiveDate, year: i32) -> NaiveDate {
    project_month_day(year, start_date.month(), start_date.day())
}

/// Returns the start of the current employment cycle.
///
/// The current cycle begins on the most recent anniversary of `start_date`
/// that lies strictly before `today`: this year's anniversary when `today`
/// is past it, last year's otherwise. On the anniversary itself the previous
/// year's date is returned, because the comparison is strict.
///
/// # Arguments
///
/// * `start_date` - The hire date of the employment contract
/// * `today` - The reference date for the computation
///
/// # Returns
///
/// The cycle boundary date. Always satisfies `result <= today`.
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::current_employment_cycle;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(
///     current_employment_cycle(start, today),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
/// );
///
/// let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// assert_eq!(
///     current_employment_cycle(start, today),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
/// );
/// ```
pub fn current_employment_cycle(start_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_years_date = anniversary_in_year(start_date, today.year());
    if today > this_years_date {
        this_years_date
    } else {
        anniversary_in_year(start_date, today.year() - 1)
    }
}
