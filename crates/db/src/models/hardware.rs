//! Hardware catalog models and DTOs.
//!
//! Hardware items are a global catalog (LED walls, printers, TVs) that
//! venues reference through the `venue_hardware` join table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{DbId, Timestamp};

/// A row from the `hardware_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HardwareItem {
    pub id: DbId,
    pub name: String,
    pub specs: String,
    pub notes: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new hardware item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHardwareItem {
    pub name: String,
    pub specs: Option<String>,
    pub notes: Option<String>,
}

/// DTO for partially updating a hardware item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHardwareItem {
    pub name: Option<String>,
    pub specs: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}
