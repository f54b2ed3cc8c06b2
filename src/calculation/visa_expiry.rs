//! Work visa expiry window.
//!
//! This module decides whether a visa expiry date is close enough, or already
//! past, for the expiry alert to fire.

use chrono::{Datelike, NaiveDate};

use super::calendar::{project_month_day, shift_months};

/// Returns true once today is strictly past the point one month before the
/// visa expiry date.
///
/// The window opens in the expiry date's own year (December of the previous
/// year for January expiries) and never closes, so a visa that expired long
/// ago keeps alerting until the expiry date is updated.
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::employment_visa_expire_window;
/// use chrono::NaiveDate;
///
/// let expires = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
/// assert!(employment_visa_expire_window(expires, today));
/// ```
pub fn employment_visa_expire_window(expire_date: NaiveDate, today: NaiveDate) -> bool {
    let from = if expire_date.month() > 1 {
        let shifted = shift_months(expire_date, -1);
        project_month_day(expire_date.year(), shifted.month(), shifted.day())
    } else {
        project_month_day(expire_date.year() - 1, 12, expire_date.day())
    };

    today > from
}
