//! User models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use barplan_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// DTO for partially updating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}
