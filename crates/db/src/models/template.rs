//! Deliverable template models and DTOs.
//!
//! Templates define reusable deliverable types ("Cube LED Video",
//! "Poster A3"). A template scoped to a venue applies only there; a
//! template with no venue is global and applies everywhere. Templates
//! flagged `is_default` are auto-attached when a venue joins an event.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{DbId, Timestamp};

/// A row from the `deliverable_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeliverableTemplate {
    pub id: DbId,
    pub name: String,
    pub specs: String,
    pub category: String,
    pub venue_id: Option<DbId>,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new deliverable template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeliverableTemplate {
    pub name: String,
    pub specs: Option<String>,
    pub category: String,
    pub venue_id: Option<DbId>,
    pub is_default: Option<bool>,
}

/// DTO for partially updating a deliverable template.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDeliverableTemplate {
    pub name: Option<String>,
    pub specs: Option<String>,
    pub category: Option<String>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
}
