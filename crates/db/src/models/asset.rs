//! Asset metadata models and DTOs.
//!
//! Only upload metadata is stored; file bytes live in external storage.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{DbId, Timestamp};

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub deliverable_id: DbId,
    pub original_filename: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size_bytes: i64,
    pub uploaded_by: Option<DbId>,
    pub notes: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an uploaded asset against a deliverable.
///
/// `file_type` is not accepted from the caller; it is classified from
/// the filename extension.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub original_filename: String,
    pub file_path: String,
    pub file_size_bytes: Option<i64>,
    pub uploaded_by: Option<DbId>,
    pub notes: Option<String>,
}

/// DTO for partially updating an asset.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAsset {
    pub notes: Option<String>,
    pub is_approved: Option<bool>,
}
