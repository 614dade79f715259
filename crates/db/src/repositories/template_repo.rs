//! Repository for the `deliverable_templates` table.
//!
//! Besides CRUD, this is the Catalog lookup the generator consumes:
//! "which default templates apply to venue V" means venue-scoped
//! defaults plus global defaults, active ones only.

use sqlx::PgPool;

use barplan_core::types::DbId;

use crate::models::template::{
    CreateDeliverableTemplate, DeliverableTemplate, UpdateDeliverableTemplate,
};

/// Column list for `deliverable_templates` queries.
const TEMPLATE_COLUMNS: &str =
    "id, name, specs, category, venue_id, is_default, is_active, created_at";

/// Provides data access for deliverable templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Create a new deliverable template.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateDeliverableTemplate,
    ) -> Result<DeliverableTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO deliverable_templates (name, specs, category, venue_id, is_default) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TEMPLATE_COLUMNS}"
        );
        sqlx::query_as::<_, DeliverableTemplate>(&query)
            .bind(&dto.name)
            .bind(dto.specs.as_deref().unwrap_or(""))
            .bind(&dto.category)
            .bind(dto.venue_id)
            .bind(dto.is_default.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a template by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DeliverableTemplate>, sqlx::Error> {
        let query = format!("SELECT {TEMPLATE_COLUMNS} FROM deliverable_templates WHERE id = $1");
        sqlx::query_as::<_, DeliverableTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all templates ordered by category then name.
    pub async fn list(pool: &PgPool) -> Result<Vec<DeliverableTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {TEMPLATE_COLUMNS} FROM deliverable_templates ORDER BY category, name"
        );
        sqlx::query_as::<_, DeliverableTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the active default templates applying to a venue.
    ///
    /// Venue-scoped defaults plus global (unscoped) defaults. This is the
    /// set the generator materializes into `event_deliverables`.
    pub async fn defaults_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<DeliverableTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {TEMPLATE_COLUMNS} FROM deliverable_templates \
             WHERE is_default AND is_active AND (venue_id = $1 OR venue_id IS NULL) \
             ORDER BY category, name"
        );
        sqlx::query_as::<_, DeliverableTemplate>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a template.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateDeliverableTemplate,
    ) -> Result<Option<DeliverableTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE deliverable_templates SET \
                 name = COALESCE($2, name), \
                 specs = COALESCE($3, specs), \
                 category = COALESCE($4, category), \
                 is_default = COALESCE($5, is_default), \
                 is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING {TEMPLATE_COLUMNS}"
        );
        sqlx::query_as::<_, DeliverableTemplate>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.specs)
            .bind(&dto.category)
            .bind(dto.is_default)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a template by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM deliverable_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
