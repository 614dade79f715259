//! Venue models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{DbId, Timestamp};

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub location: Option<String>,
}

/// DTO for partially updating a venue.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}
