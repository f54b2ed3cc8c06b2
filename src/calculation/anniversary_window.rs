//! Anniversary reminder window.
//!
//! This module decides whether today falls inside the one-month span that
//! precedes a hire-date anniversary, which is when the anniversary reminder
//! alert fires.

use chrono::{Datelike, NaiveDate};

use super::calendar::{project_month_day, shift_months};
use super::employment_cycle::anniversary_in_year;

/// Returns true when today lies inside the anniversary reminder window.
///
/// The window opens one month before this year's anniversary and closes on
/// the anniversary itself; both ends are exclusive. January hire dates open
/// the window in December of the previous year, keeping the hire date's day
/// of month.
///
/// # Behavior
///
/// The closing boundary is always this year's anniversary, so for January
/// hires the December portion of the span can never be inside the window;
/// the reminder only fires once the new year has started.
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::employment_anniversary_window;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
/// assert!(employment_anniversary_window(start, today));
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert!(!employment_anniversary_window(start, today));
/// ```
pub fn employment_anniversary_window(start_date: NaiveDate, today: NaiveDate) -> bool {
    let from = if start_date.month() > 1 {
        let shifted = shift_months(start_date, -1);
        project_month_day(today.year(), shifted.month(), shifted.day())
    } else {
        project_month_day(today.year() - 1, 12, start_date.day())
    };
    let to = anniversary_in_year(start_date, today.year());

    today > from && today < to
}
