//! Repository for the `hardware_items` table.

use sqlx::PgPool;

use barplan_core::types::DbId;

use crate::models::hardware::{CreateHardwareItem, HardwareItem, UpdateHardwareItem};

/// Column list for `hardware_items` queries.
const HARDWARE_COLUMNS: &str = "id, name, specs, notes, is_active, created_at, updated_at";

/// Provides data access for the global hardware catalog.
pub struct HardwareRepo;

impl HardwareRepo {
    /// Create a new hardware item.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateHardwareItem,
    ) -> Result<HardwareItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO hardware_items (name, specs, notes) \
             VALUES ($1, $2, $3) \
             RETURNING {HARDWARE_COLUMNS}"
        );
        sqlx::query_as::<_, HardwareItem>(&query)
            .bind(&dto.name)
            .bind(dto.specs.as_deref().unwrap_or(""))
            .bind(dto.notes.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// Find a hardware item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HardwareItem>, sqlx::Error> {
        let query = format!("SELECT {HARDWARE_COLUMNS} FROM hardware_items WHERE id = $1");
        sqlx::query_as::<_, HardwareItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all hardware items ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<HardwareItem>, sqlx::Error> {
        let query = format!("SELECT {HARDWARE_COLUMNS} FROM hardware_items ORDER BY name");
        sqlx::query_as::<_, HardwareItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Partially update a hardware item.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateHardwareItem,
    ) -> Result<Option<HardwareItem>, sqlx::Error> {
        let query = format!(
            "UPDATE hardware_items SET \
                 name = COALESCE($2, name), \
                 specs = COALESCE($3, specs), \
                 notes = COALESCE($4, notes), \
                 is_active = COALESCE($5, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {HARDWARE_COLUMNS}"
        );
        sqlx::query_as::<_, HardwareItem>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.specs)
            .bind(&dto.notes)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hardware item by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hardware_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
