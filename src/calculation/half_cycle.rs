//! Employment half-cycle computation.
//!
//! This module determines the boundary of the rolling 6-month period used
//! for disciplinary warning aggregation.

use chrono::{Datelike, NaiveDate};

use super::calendar::{project_month_day, shift_months};
use super::employment_cycle::anniversary_in_year;

/// Returns the start of the current employment half-cycle.
///
/// The anchor is the hire date shifted by six months: backwards into
/// `today`'s year for July-December hires, forwards into the previous year
/// for January-June hires. When `today` is strictly past the anchor, the
/// anchor is the boundary.
///
/// # Behavior
///
/// When `today` has not passed the anchor, the boundary falls back to the
/// previous year's full anniversary rather than the half-shifted anchor.
/// Warning windows for July-December hires therefore widen to a full year
/// around the turn of the half-cycle. Downstream aggregation totals depend
/// on this boundary, so the asymmetry is part of the contract.
///
/// # Arguments
///
/// * `start_date` - The hire date of the employment contract
/// * `today` - The reference date for the computation
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::current_employment_half_cycle;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2022, 11, 10).unwrap();
///
/// // Past the May anchor: the half-shifted date is the boundary.
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// assert_eq!(
///     current_employment_half_cycle(start, today),
///     NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
/// );
///
/// // Before the May anchor: the boundary falls back to the previous
/// // year's anniversary.
/// let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// assert_eq!(
///     current_employment_half_cycle(start, today),
///     NaiveDate::from_ymd_opt(2024, 11, 10).unwrap()
/// );
/// ```
pub fn current_employment_half_cycle(start_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let anchor = if start_date.month() > 6 {
        let shifted = shift_months(start_date, -6);
        project_month_day(today.year(), shifted.month(), shifted.day())
    } else {
        let shifted = shift_months(start_date, 6);
        project_month_day(today.year() - 1, shifted.month(), shifted.day())
    };

    if today > anchor {
        anchor
    } else {
        // Fallback anchors on the full anniversary, not the half-shifted date.
        anniversary_in_year(start_date, today.year() - 1)
    }
}
