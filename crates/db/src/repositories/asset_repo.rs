//! Repository for the `assets` table.
//!
//! Registering an asset against a `todo` deliverable moves it to
//! `in_progress` in the same transaction, so the first upload and the
//! status change are atomic.

use sqlx::PgPool;

use barplan_core::asset::FileType;
use barplan_core::deliverable::{STATUS_IN_PROGRESS, STATUS_TODO};
use barplan_core::types::DbId;

use crate::models::asset::{Asset, CreateAsset, UpdateAsset};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, deliverable_id, original_filename, file_path, file_type, \
    file_size_bytes, uploaded_by, notes, is_approved, created_at, updated_at";

/// Provides data access for uploaded asset metadata.
pub struct AssetRepo;

impl AssetRepo {
    /// Register an uploaded asset against a deliverable.
    ///
    /// Classifies the file type from the filename, inserts the metadata
    /// row, and transitions the deliverable `todo -> in_progress` if it
    /// has not been started yet. Deliverables further along the workflow
    /// are left untouched.
    pub async fn create_for_deliverable(
        pool: &PgPool,
        deliverable_id: DbId,
        dto: &CreateAsset,
    ) -> Result<Asset, sqlx::Error> {
        let file_type = FileType::from_filename(&dto.original_filename);

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO assets \
                 (deliverable_id, original_filename, file_path, file_type, \
                  file_size_bytes, uploaded_by, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {ASSET_COLUMNS}"
        );
        let asset = sqlx::query_as::<_, Asset>(&query)
            .bind(deliverable_id)
            .bind(&dto.original_filename)
            .bind(&dto.file_path)
            .bind(file_type.as_str())
            .bind(dto.file_size_bytes.unwrap_or(0))
            .bind(dto.uploaded_by)
            .bind(dto.notes.as_deref().unwrap_or(""))
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE event_deliverables SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status = $3",
        )
        .bind(deliverable_id)
        .bind(STATUS_IN_PROGRESS)
        .bind(STATUS_TODO)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(asset)
    }

    /// Find an asset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a deliverable's assets, newest first.
    pub async fn list_for_deliverable(
        pool: &PgPool,
        deliverable_id: DbId,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE deliverable_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(deliverable_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update an asset's notes or approval flag.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                 notes = COALESCE($2, notes), \
                 is_approved = COALESCE($3, is_approved), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&dto.notes)
            .bind(dto.is_approved)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
