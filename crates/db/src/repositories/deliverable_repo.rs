//! Repository for the `event_deliverables` table, including the generator.
//!
//! The generator is a set-based upsert: the database's uniqueness
//! constraint on (event_id, template_id) is the race arbiter, so a
//! concurrent duplicate insert collapses to a no-op instead of an error.

use sqlx::PgPool;

use barplan_core::deliverable::STATUS_TODO;
use barplan_core::types::DbId;

use crate::models::deliverable::{
    EventDeliverable, EventDeliverableDetail, UpdateEventDeliverable,
};

/// Column list for `event_deliverables` queries.
const DELIVERABLE_COLUMNS: &str = "\
    id, event_id, template_id, status, assigned_to, is_enabled, is_starred, \
    notes, created_at, updated_at";

/// Column list for deliverable-with-template joins.
const DETAIL_COLUMNS: &str = "\
    d.id, d.event_id, d.template_id, t.name AS template_name, \
    t.specs AS template_specs, t.category, d.status, d.assigned_to, \
    d.is_enabled, d.is_starred, d.notes, d.created_at, d.updated_at";

/// Provides data access for event deliverable work items.
pub struct DeliverableRepo;

impl DeliverableRepo {
    /// Generate the deliverable work items an event owes a venue.
    ///
    /// Inserts one `todo` row per active default template applying to the
    /// venue (venue-scoped or global), skipping pairs that already exist.
    /// Idempotent: re-running never duplicates or resets existing rows.
    ///
    /// Returns the number of rows actually created.
    pub async fn generate_for_venue(
        pool: &PgPool,
        event_id: DbId,
        venue_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO event_deliverables (event_id, template_id, status) \
             SELECT $1, t.id, $3 \
             FROM deliverable_templates t \
             WHERE t.is_default AND t.is_active \
               AND (t.venue_id = $2 OR t.venue_id IS NULL) \
             ON CONFLICT (event_id, template_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(venue_id)
        .bind(STATUS_TODO)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Find a deliverable by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventDeliverable>, sqlx::Error> {
        let query = format!("SELECT {DELIVERABLE_COLUMNS} FROM event_deliverables WHERE id = $1");
        sqlx::query_as::<_, EventDeliverable>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an event's deliverables joined with template data, ordered by
    /// template category then name.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventDeliverableDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} \
             FROM event_deliverables d \
             JOIN deliverable_templates t ON t.id = d.template_id \
             WHERE d.event_id = $1 \
             ORDER BY t.category, t.name"
        );
        sqlx::query_as::<_, EventDeliverableDetail>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a deliverable work item.
    ///
    /// Status transition legality is validated by the caller against the
    /// workflow state machine before this runs.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateEventDeliverable,
    ) -> Result<Option<EventDeliverable>, sqlx::Error> {
        let query = format!(
            "UPDATE event_deliverables SET \
                 status = COALESCE($2, status), \
                 assigned_to = COALESCE($3, assigned_to), \
                 is_enabled = COALESCE($4, is_enabled), \
                 is_starred = COALESCE($5, is_starred), \
                 notes = COALESCE($6, notes), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {DELIVERABLE_COLUMNS}"
        );
        sqlx::query_as::<_, EventDeliverable>(&query)
            .bind(id)
            .bind(&dto.status)
            .bind(dto.assigned_to)
            .bind(dto.is_enabled)
            .bind(dto.is_starred)
            .bind(&dto.notes)
            .fetch_optional(pool)
            .await
    }
}
