//! Integration tests for deliverable generation.
//!
//! Exercises the generator against a real database:
//! - Idempotence of repeated generation
//! - Uniqueness of (event, template) pairs
//! - Template scoping (venue vs global, default and active flags)
//! - Venue detachment leaving generated rows in place

use chrono::NaiveDate;
use sqlx::PgPool;

use barplan_core::deliverable::{STATUS_REVIEW, STATUS_TODO};
use barplan_db::models::event::CreateEvent;
use barplan_db::models::template::CreateDeliverableTemplate;
use barplan_db::models::venue::CreateVenue;
use barplan_db::repositories::{DeliverableRepo, EventRepo, TemplateRepo, VenueRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_venue(name: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        location: None,
    }
}

fn new_template(name: &str, venue_id: Option<i64>, is_default: bool) -> CreateDeliverableTemplate {
    CreateDeliverableTemplate {
        name: name.to_string(),
        specs: None,
        category: "screen".to_string(),
        venue_id,
        is_default: Some(is_default),
    }
}

fn new_event(name: &str) -> CreateEvent {
    CreateEvent {
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
        description: None,
        brief: None,
        theme_id: None,
        created_by: None,
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn generates_one_row_per_default_template(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Cube LED Video", Some(venue.id), true))
        .await
        .unwrap();
    TemplateRepo::create(&pool, &new_template("Poster A3", Some(venue.id), true))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();

    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();
    let created = DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();
    assert_eq!(created, 2);

    let deliverables = DeliverableRepo::list_for_event(&pool, event.id).await.unwrap();
    assert_eq!(deliverables.len(), 2);
    assert!(deliverables.iter().all(|d| d.status == STATUS_TODO));
    assert!(deliverables.iter().all(|d| d.is_enabled));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generation_is_idempotent(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Cube LED Video", Some(venue.id), true))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();
    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();

    let first = DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();
    let second = DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 0);

    let deliverables = DeliverableRepo::list_for_event(&pool, event.id).await.unwrap();
    assert_eq!(deliverables.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn regeneration_never_resets_existing_status(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Cube LED Video", Some(venue.id), true))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();
    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();
    DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();

    // Move the work item along the workflow, then regenerate.
    let deliverable = &DeliverableRepo::list_for_event(&pool, event.id).await.unwrap()[0];
    sqlx::query("UPDATE event_deliverables SET status = $2 WHERE id = $1")
        .bind(deliverable.id)
        .bind(STATUS_REVIEW)
        .execute(&pool)
        .await
        .unwrap();

    DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();

    let after = DeliverableRepo::list_for_event(&pool, event.id).await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].status, STATUS_REVIEW);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn global_templates_apply_to_every_venue(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Instagram Story", None, true))
        .await
        .unwrap();
    TemplateRepo::create(&pool, &new_template("Cube LED Video", Some(venue.id), true))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();

    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();
    let created = DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();
    assert_eq!(created, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_default_and_inactive_templates_excluded(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Occasional Banner", Some(venue.id), false))
        .await
        .unwrap();
    let retired = TemplateRepo::create(&pool, &new_template("Old Poster", Some(venue.id), true))
        .await
        .unwrap();
    sqlx::query("UPDATE deliverable_templates SET is_active = FALSE WHERE id = $1")
        .bind(retired.id)
        .execute(&pool)
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();

    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();
    let created = DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();
    assert_eq!(created, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn templates_scoped_to_other_venues_excluded(pool: PgPool) {
    let neon = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    let cellar = VenueRepo::create(&pool, &new_venue("The Cellar")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Cellar TV Loop", Some(cellar.id), true))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();

    EventRepo::attach_venue(&pool, event.id, neon.id).await.unwrap();
    let created = DeliverableRepo::generate_for_venue(&pool, event.id, neon.id)
        .await
        .unwrap();
    assert_eq!(created, 0);
}

// ---------------------------------------------------------------------------
// Venue association semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_attach_is_noop(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();

    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();
    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();

    let venues = EventRepo::list_venues(&pool, event.id).await.unwrap();
    assert_eq!(venues.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detaching_venue_keeps_generated_deliverables(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Cube LED Video", Some(venue.id), true))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();
    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();
    DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();

    let removed = EventRepo::detach_venue(&pool, event.id, venue.id).await.unwrap();
    assert!(removed);

    // Work items survive the detachment.
    let deliverables = DeliverableRepo::list_for_event(&pool, event.id).await.unwrap();
    assert_eq!(deliverables.len(), 1);
    assert!(EventRepo::list_venues(&pool, event.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_event_cascades_deliverables(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Le Néon")).await.unwrap();
    TemplateRepo::create(&pool, &new_template("Cube LED Video", Some(venue.id), true))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Full Moon Party"))
        .await
        .unwrap();
    EventRepo::attach_venue(&pool, event.id, venue.id).await.unwrap();
    DeliverableRepo::generate_for_venue(&pool, event.id, venue.id)
        .await
        .unwrap();

    assert!(EventRepo::delete(&pool, event.id).await.unwrap());

    let orphans: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM event_deliverables WHERE event_id = $1")
            .bind(event.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(orphans, 0);
}
