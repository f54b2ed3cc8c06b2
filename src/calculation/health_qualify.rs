//! Health insurance qualification window.
//!
//! This module decides whether a hiring has passed the two-month mark after
//! which the employee may enroll for health and dental insurance.

use chrono::{Datelike, NaiveDate};

use super::calendar::{project_month_day, shift_months};

/// Returns true once today is strictly past the qualification date, which
/// sits two months after the start date.
///
/// # Behavior
///
/// For November and December hires the qualification date lands in the next
/// calendar year. In that branch the month and day are taken from the start
/// date shifted back ten months, so a month-end day is clamped against the
/// start year's calendar even when the qualification year would allow it.
///
/// # Examples
///
/// ```
/// use tenure_engine::calculation::employment_health_qualify_window;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert!(employment_health_qualify_window(start, today));
/// ```
pub fn employment_health_qualify_window(start_date: NaiveDate, today: NaiveDate) -> bool {
    let check_date = if start_date.month() < 11 {
        let shifted = shift_months(start_date, 2);
        project_month_day(start_date.year(), shifted.month(), shifted.day())
    } else {
        let shifted = shift_months(start_date, -10);
        project_month_day(start_date.year() + 1, shifted.month(), shifted.day())
    };

    today > check_date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // HQ-001: qualified two months and a few days in
    // ==========================================================================
    #[test]
    fn test_hq_001_qualified_after_two_months() {
        assert!(employment_health_qualify_window(
            make_date("2024-01-10"),
            make_date("2024-03-15")
        ));
    }

    // ==========================================================================
    // HQ-002: still inside the first two months
    // ==========================================================================
    #[test]
    fn test_hq_002_not_yet_qualified() {
        assert!(!employment_health_qualify_window(
            make_date("2024-01-10"),
            make_date("2024-02-20")
        ));
    }

    #[test]
    fn test_qualification_date_itself_does_not_qualify() {
        assert!(!employment_health_qualify_window(
            make_date("2024-01-10"),
            make_date("2024-03-10")
        ));
        assert!(employment_health_qualify_window(
            make_date("2024-01-10"),
            make_date("2024-03-11")
        ));
    }

    #[test]
    fn test_november_hire_qualifies_in_next_january() {
        // November 15 plus two months is January 15 of the following year.
        assert!(!employment_health_qualify_window(
            make_date("2023-11-15"),
            make_date("2024-01-15")
        ));
        assert!(employment_health_qualify_window(
            make_date("2023-11-15"),
            make_date("2024-01-16")
        ));
    }

    #[test]
    fn test_december_month_end_clamps_against_start_year() {
        // December 30 2023 shifted back ten months clamps to February 28
        // 2023, so the qualification date is February 28 2024 even though
        // 2024 has a February 29.
        assert!(!employment_health_qualify_window(
            make_date("2023-12-30"),
            make_date("2024-02-28")
        ));
        assert!(employment_health_qualify_window(
            make_date("2023-12-30"),
            make_date("2024-02-29")
        ));
    }

    #[test]
    fn test_december_leap_start_clamps_at_projection() {
        // December 31 2024 shifts back to February 29 2024; the projection
        // into 2025 clamps that to February 28.
        assert!(employment_health_qualify_window(
            make_date("2024-12-31"),
            make_date("2025-03-01")
        ));
        assert!(!employment_health_qualify_window(
            make_date("2024-12-31"),
            make_date("2025-02-28")
        ));
    }

    #[test]
    fn test_october_hire_stays_in_current_year() {
        assert!(employment_health_qualify_window(
            make_date("2024-10-05"),
            make_date("2024-12-06")
        ));
        assert!(!employment_health_qualify_window(
            make_date("2024-10-05"),
            make_date("2024-12-05")
        ));
    }
}
