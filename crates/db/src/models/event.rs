//! Event models and DTOs.
//!
//! The J-7 deadline is derived from `date` at read time; it is never a
//! column, so it can never go stale.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{Date, DbId, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub date: Date,
    pub description: String,
    pub brief: String,
    pub theme_id: Option<DbId>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
///
/// When `theme_id` is omitted, the repository resolves the active theme
/// period matching the event date's month and year.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub date: Date,
    pub description: Option<String>,
    pub brief: Option<String>,
    pub theme_id: Option<DbId>,
    pub created_by: Option<DbId>,
}

/// DTO for partially updating an event.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub date: Option<Date>,
    pub description: Option<String>,
    pub brief: Option<String>,
    pub theme_id: Option<DbId>,
}

/// A row from the `event_venues` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventVenue {
    pub id: DbId,
    pub event_id: DbId,
    pub venue_id: DbId,
    pub created_at: Timestamp,
}
