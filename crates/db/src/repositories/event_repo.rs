//! Repository for the `events` and `event_venues` tables.
//!
//! Venue attachment is the trigger for deliverable generation; callers
//! run [`crate::repositories::DeliverableRepo::generate_for_venue`]
//! immediately after [`EventRepo::attach_venue`] so the association is
//! never reported complete without its work items.

use sqlx::PgPool;

use barplan_core::theme::PeriodKey;
use barplan_core::types::{Date, DbId};

use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::models::venue::Venue;

/// Column list for `events` queries.
const EVENT_COLUMNS: &str = "\
    id, name, date, description, brief, theme_id, created_by, \
    created_at, updated_at";

/// Provides data access for events and their venue associations.
pub struct EventRepo;

impl EventRepo {
    /// Create a new event.
    ///
    /// When no theme is given, the active theme period matching the event
    /// date's month and year is resolved from the event date itself (not
    /// the wall clock), so creation is deterministic.
    pub async fn create(pool: &PgPool, dto: &CreateEvent) -> Result<Event, sqlx::Error> {
        let theme_id = match dto.theme_id {
            Some(id) => Some(id),
            None => {
                let period = PeriodKey::for_date(dto.date);
                sqlx::query_scalar::<_, DbId>(
                    "SELECT id FROM theme_periods WHERE month = $1 AND year = $2 AND is_active",
                )
                .bind(period.month)
                .bind(period.year)
                .fetch_optional(pool)
                .await?
            }
        };

        let query = format!(
            "INSERT INTO events (name, date, description, brief, theme_id, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&dto.name)
            .bind(dto.date)
            .bind(dto.description.as_deref().unwrap_or(""))
            .bind(dto.brief.as_deref().unwrap_or(""))
            .bind(theme_id)
            .bind(dto.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events on or after the given date, soonest first.
    pub async fn list_upcoming(pool: &PgPool, from: Date) -> Result<Vec<Event>, sqlx::Error> {
        let query =
            format!("SELECT {EVENT_COLUMNS} FROM events WHERE date >= $1 ORDER BY date, name");
        sqlx::query_as::<_, Event>(&query)
            .bind(from)
            .fetch_all(pool)
            .await
    }

    /// List events within an inclusive date range, for the calendar view.
    pub async fn list_between(
        pool: &PgPool,
        first: Date,
        last: Date,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE date >= $1 AND date <= $2 \
             ORDER BY date, name"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(first)
            .bind(last)
            .fetch_all(pool)
            .await
    }

    /// Partially update an event.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                 name = COALESCE($2, name), \
                 date = COALESCE($3, date), \
                 description = COALESCE($4, description), \
                 brief = COALESCE($5, brief), \
                 theme_id = COALESCE($6, theme_id), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.date)
            .bind(&dto.description)
            .bind(&dto.brief)
            .bind(dto.theme_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Deliverables and venue associations cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Venue associations
    // -----------------------------------------------------------------------

    /// List the venues associated with an event, ordered by name.
    pub async fn list_venues(pool: &PgPool, event_id: DbId) -> Result<Vec<Venue>, sqlx::Error> {
        let query = "SELECT v.id, v.name, v.location, v.is_active, v.created_at, v.updated_at \
             FROM venues v \
             JOIN event_venues ev ON ev.venue_id = v.id \
             WHERE ev.event_id = $1 \
             ORDER BY v.name";
        sqlx::query_as::<_, Venue>(query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Associate a venue with an event.
    ///
    /// Idempotent: attaching an already-attached venue is a no-op. The
    /// uniqueness constraint on (event_id, venue_id) is the race arbiter
    /// for concurrent attach requests.
    pub async fn attach_venue(
        pool: &PgPool,
        event_id: DbId,
        venue_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO event_venues (event_id, venue_id) \
             VALUES ($1, $2) \
             ON CONFLICT (event_id, venue_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(venue_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a venue association from an event.
    ///
    /// Existing deliverables generated for that venue's templates are kept:
    /// removal never retracts work items.
    ///
    /// Returns `true` if an association was removed.
    pub async fn detach_venue(
        pool: &PgPool,
        event_id: DbId,
        venue_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_venues WHERE event_id = $1 AND venue_id = $2")
            .bind(event_id)
            .bind(venue_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
