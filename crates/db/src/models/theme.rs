//! Theme period models and DTOs.
//!
//! One theme per (month, year); `uq_theme_periods_month_year` enforces it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{DbId, Timestamp};

/// A row from the `theme_periods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThemePeriod {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub month: i16,
    pub year: i32,
    pub primary_color: String,
    pub accent_color: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new theme period.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateThemePeriod {
    pub name: String,
    pub description: Option<String>,
    pub month: i16,
    pub year: i32,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
}

/// DTO for partially updating a theme period.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateThemePeriod {
    pub name: Option<String>,
    pub description: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub is_active: Option<bool>,
}
