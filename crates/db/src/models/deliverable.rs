//! Event deliverable models and DTOs.
//!
//! Rows are created exclusively by the generator when a venue is attached
//! to an event; there is deliberately no create DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{DbId, Timestamp};

/// A row from the `event_deliverables` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventDeliverable {
    pub id: DbId,
    pub event_id: DbId,
    pub template_id: DbId,
    pub status: String,
    pub assigned_to: Option<DbId>,
    pub is_enabled: bool,
    pub is_starred: bool,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event deliverable joined with its template, for list/detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventDeliverableDetail {
    pub id: DbId,
    pub event_id: DbId,
    pub template_id: DbId,
    pub template_name: String,
    pub template_specs: String,
    pub category: String,
    pub status: String,
    pub assigned_to: Option<DbId>,
    pub is_enabled: bool,
    pub is_starred: bool,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for partially updating a deliverable work item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventDeliverable {
    pub status: Option<String>,
    pub assigned_to: Option<DbId>,
    pub is_enabled: Option<bool>,
    pub is_starred: Option<bool>,
    pub notes: Option<String>,
}
