//! Calendar construction primitives.
//!
//! This module provides the date-construction helpers shared by the tenure
//! window rules: strict date building, month arithmetic, and the explicit
//! clamping policy for projecting a month/day anchor into another year.

use chrono::{Datelike, NaiveDate};

use crate::error::{TenureError, TenureResult};

/// Builds a date strictly from its components.
///
/// No normalization is applied: a combination that does not name a real
/// calendar day (e.g. February 30, or February 29 in a non-leap year) is
/// rejected with [`TenureError::InvalidDate`].
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month (1-12)
/// * `day` - The day of month (1-31)
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::build_date;
///
/// assert!(build_date(2024, 2, 29).is_ok());
/// assert!(build_date(2025, 2, 29).is_err());
/// assert!(build_date(2025, 2, 30).is_err());
/// ```
pub fn build_date(year: i32, month: u32, day: u32) -> TenureResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TenureError::InvalidDate { year, month, day })
}

/// Shifts a date by a number of months, clamping the day of month.
///
/// When the source day does not exist in the target month, the result clamps
/// to the target month's last day (January 31 shifted by +1 month becomes
/// February 28, or February 29 in a leap year). This matches how hire-date
/// anchors are moved around the calendar everywhere in this crate.
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::shift_months;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// assert_eq!(
///     shift_months(jan_31, 1),
///     NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
/// );
///
/// let nov_15 = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
/// assert_eq!(
///     shift_months(nov_15, 2),
///     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
/// );
/// ```
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    project_month_day(year, month, date.day())
}

/// Projects a month/day pair into a year, clamping to the month's end.
///
/// The month and day must come from a real calendar date; the projection
/// itself never fails. A day past the end of the target month clamps to its
/// last day, which is the normalization rule for leap-day hire dates: a
/// February 29 start projects to February 28 in non-leap years.
pub(crate) fn project_month_day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| last_day_of_month(year, month))
}

/// Returns the last day of the given month.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .expect("month taken from a valid date")
}
