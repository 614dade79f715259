//! Month grid computation for the calendar view.
//!
//! Produces the Monday-first week matrix the calendar screen renders:
//! each week is seven day numbers, with 0 marking cells that belong to the
//! adjacent month.

use chrono::{Datelike, Duration, NaiveDate};

use crate::theme::validate_month;

/// One week row: seven day-of-month numbers, 0 for padding cells.
pub type Week = [u32; 7];

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("valid date")
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).expect("valid date")
    };
    (next_first - first).num_days() as u32
}

/// Last day of the given month as a date.
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).expect("valid date")
}

/// Build the Monday-first week grid for a month.
///
/// Returns an error for out-of-range months.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<Week>, String> {
    validate_month(month as i16)?;

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| format!("Invalid year/month {year}-{month}"))?;
    let total_days = days_in_month(year, month);

    // Monday = 0 offset.
    let lead = first.weekday().num_days_from_monday();

    let mut weeks: Vec<Week> = Vec::new();
    let mut week: Week = [0; 7];
    let mut slot = lead as usize;

    for day in 1..=total_days {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    Ok(weeks)
}

/// The (year, month) pair preceding the given month.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The (year, month) pair following the given month.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Inclusive first and last date of the month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), String> {
    validate_month(month as i16)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| format!("Invalid year/month {year}-{month}"))?;
    Ok((first, first + Duration::days(days_in_month(year, month) as i64 - 1)))
}
