//! Repository for the `venues` and `venue_hardware` tables.

use sqlx::PgPool;

use barplan_core::types::DbId;

use crate::models::hardware::HardwareItem;
use crate::models::venue::{CreateVenue, UpdateVenue, Venue};

/// Column list for `venues` queries.
const VENUE_COLUMNS: &str = "id, name, location, is_active, created_at, updated_at";

/// Provides data access for venues and their hardware assignments.
pub struct VenueRepo;

impl VenueRepo {
    /// Create a new venue.
    pub async fn create(pool: &PgPool, dto: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, location) VALUES ($1, $2) RETURNING {VENUE_COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&dto.name)
            .bind(dto.location.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List venues ordered by name.
    ///
    /// With `active_only`, inactive venues are filtered out.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = if active_only {
            format!("SELECT {VENUE_COLUMNS} FROM venues WHERE is_active ORDER BY name")
        } else {
            format!("SELECT {VENUE_COLUMNS} FROM venues ORDER BY name")
        };
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// Partially update a venue.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                 name = COALESCE($2, name), \
                 location = COALESCE($3, location), \
                 is_active = COALESCE($4, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {VENUE_COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.location)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Hardware assignments
    // -----------------------------------------------------------------------

    /// List the hardware items assigned to a venue, ordered by name.
    pub async fn list_hardware(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<HardwareItem>, sqlx::Error> {
        let query = "SELECT h.id, h.name, h.specs, h.notes, h.is_active, \
                 h.created_at, h.updated_at \
             FROM hardware_items h \
             JOIN venue_hardware vh ON vh.hardware_item_id = h.id \
             WHERE vh.venue_id = $1 \
             ORDER BY h.name";
        sqlx::query_as::<_, HardwareItem>(query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// Assign a hardware item to a venue.
    ///
    /// Idempotent: assigning the same item twice is a no-op.
    pub async fn assign_hardware(
        pool: &PgPool,
        venue_id: DbId,
        hardware_item_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO venue_hardware (venue_id, hardware_item_id) \
             VALUES ($1, $2) \
             ON CONFLICT (venue_id, hardware_item_id) DO NOTHING",
        )
        .bind(venue_id)
        .bind(hardware_item_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a hardware item from a venue.
    ///
    /// Returns `true` if an assignment was removed.
    pub async fn remove_hardware(
        pool: &PgPool,
        venue_id: DbId,
        hardware_item_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM venue_hardware WHERE venue_id = $1 AND hardware_item_id = $2")
                .bind(venue_id)
                .bind(hardware_item_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
