//! Theme period resolution.
//!
//! Each (month, year) pair can carry at most one active theme. Resolution
//! always takes an explicit date, so the "current" theme is just the theme
//! of whatever date the caller passes in.

use serde::{Deserialize, Serialize};

use crate::types::Date;
use chrono::Datelike;

/// A (month, year) key identifying one theme period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodKey {
    pub month: i16,
    pub year: i32,
}

impl PeriodKey {
    /// The period a given date falls into.
    pub fn for_date(date: Date) -> Self {
        Self {
            month: date.month() as i16,
            year: date.year(),
        }
    }
}

/// Validate that a month number is in 1..=12.
pub fn validate_month(month: i16) -> Result<(), String> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(format!("Invalid month {month}. Must be between 1 and 12"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn period_for_date() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
        assert_eq!(PeriodKey::for_date(d), PeriodKey { month: 10, year: 2025 });
    }

    #[test]
    fn period_for_january_first() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(PeriodKey::for_date(d), PeriodKey { month: 1, year: 2026 });
    }

    #[test]
    fn month_bounds() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }
}
