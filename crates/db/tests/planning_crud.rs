//! Integration tests for event planning CRUD and asset registration.
//!
//! - Theme auto-resolution from the event date
//! - Unique constraints on reference data
//! - Asset registration and the todo -> in_progress transition

use chrono::NaiveDate;
use sqlx::PgPool;

use barplan_core::deliverable::{STATUS_IN_PROGRESS, STATUS_REVIEW, STATUS_TODO};
use barplan_db::models::asset::{CreateAsset, UpdateAsset};
use barplan_db::models::event::{CreateEvent, UpdateEvent};
use barplan_db::models::template::CreateDeliverableTemplate;
use barplan_db::models::theme::CreateThemePeriod;
use barplan_db::models::venue::CreateVenue;
use barplan_db::repositories::{
    AssetRepo, DeliverableRepo, EventRepo, TemplateRepo, ThemeRepo, VenueRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_event_on(name: &str, date: NaiveDate) -> CreateEvent {
    CreateEvent {
        name: name.to_string(),
        date,
        description: None,
        brief: None,
        theme_id: None,
        created_by: None,
    }
}

fn new_theme(name: &str, month: i16, year: i32) -> CreateThemePeriod {
    CreateThemePeriod {
        name: name.to_string(),
        description: None,
        month,
        year,
        primary_color: None,
        accent_color: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seeded_deliverable(pool: &PgPool) -> i64 {
    let venue = VenueRepo::create(
        pool,
        &CreateVenue {
            name: "Le Néon".to_string(),
            location: None,
        },
    )
    .await
    .unwrap();
    TemplateRepo::create(
        pool,
        &CreateDeliverableTemplate {
            name: "Cube LED Video".to_string(),
            specs: Some("960x192 mp4".to_string()),
            category: "screen".to_string(),
            venue_id: Some(venue.id),
            is_default: Some(true),
        },
    )
    .await
    .unwrap();
    let event = EventRepo::create(pool, &new_event_on("Full Moon Party", date(2025, 10, 18)))
        .await
        .unwrap();
    EventRepo::attach_venue(pool, event.id, venue.id).await.unwrap();
    DeliverableRepo::generate_for_venue(pool, event.id, venue.id)
        .await
        .unwrap();
    DeliverableRepo::list_for_event(pool, event.id).await.unwrap()[0].id
}

// ---------------------------------------------------------------------------
// Theme resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_resolves_theme_from_its_date(pool: PgPool) {
    let theme = ThemeRepo::create(&pool, &new_theme("Cyberpunk", 10, 2025))
        .await
        .unwrap();
    ThemeRepo::create(&pool, &new_theme("Eden Reborn", 11, 2025))
        .await
        .unwrap();

    let event = EventRepo::create(&pool, &new_event_on("Neon Night", date(2025, 10, 18)))
        .await
        .unwrap();
    assert_eq!(event.theme_id, Some(theme.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_without_matching_theme_has_none(pool: PgPool) {
    ThemeRepo::create(&pool, &new_theme("Cyberpunk", 10, 2025))
        .await
        .unwrap();

    let event = EventRepo::create(&pool, &new_event_on("Summer Opening", date(2026, 6, 1)))
        .await
        .unwrap();
    assert_eq!(event.theme_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_theme_not_auto_assigned(pool: PgPool) {
    let theme = ThemeRepo::create(&pool, &new_theme("Cyberpunk", 10, 2025))
        .await
        .unwrap();
    sqlx::query("UPDATE theme_periods SET is_active = FALSE WHERE id = $1")
        .bind(theme.id)
        .execute(&pool)
        .await
        .unwrap();

    let event = EventRepo::create(&pool, &new_event_on("Neon Night", date(2025, 10, 18)))
        .await
        .unwrap();
    assert_eq!(event.theme_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn explicit_theme_wins_over_resolution(pool: PgPool) {
    ThemeRepo::create(&pool, &new_theme("Cyberpunk", 10, 2025))
        .await
        .unwrap();
    let chosen = ThemeRepo::create(&pool, &new_theme("Eden Reborn", 11, 2025))
        .await
        .unwrap();

    let mut dto = new_event_on("Neon Night", date(2025, 10, 18));
    dto.theme_id = Some(chosen.id);
    let event = EventRepo::create(&pool, &dto).await.unwrap();
    assert_eq!(event.theme_id, Some(chosen.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_theme_per_month_enforced(pool: PgPool) {
    ThemeRepo::create(&pool, &new_theme("Cyberpunk", 10, 2025))
        .await
        .unwrap();
    let dup = ThemeRepo::create(&pool, &new_theme("Second October", 10, 2025)).await;
    assert!(dup.is_err());
}

// ---------------------------------------------------------------------------
// Event CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_event_changes_only_provided_fields(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event_on("Neon Night", date(2025, 10, 18)))
        .await
        .unwrap();

    let updated = EventRepo::update(
        &pool,
        event.id,
        &UpdateEvent {
            name: None,
            date: None,
            description: Some("Doors at 22:00".to_string()),
            brief: None,
            theme_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Neon Night");
    assert_eq!(updated.description, "Doors at 22:00");
    assert_eq!(updated.date, date(2025, 10, 18));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_upcoming_filters_past_events(pool: PgPool) {
    EventRepo::create(&pool, &new_event_on("Past Party", date(2025, 9, 1)))
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event_on("Tonight", date(2025, 10, 1)))
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event_on("Next Month", date(2025, 11, 1)))
        .await
        .unwrap();

    let upcoming = EventRepo::list_upcoming(&pool, date(2025, 10, 1)).await.unwrap();
    let names: Vec<&str> = upcoming.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Tonight", "Next Month"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_between_bounds_are_inclusive(pool: PgPool) {
    EventRepo::create(&pool, &new_event_on("First", date(2025, 10, 1)))
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event_on("Last", date(2025, 10, 31)))
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event_on("Outside", date(2025, 11, 1)))
        .await
        .unwrap();

    let in_month = EventRepo::list_between(&pool, date(2025, 10, 1), date(2025, 10, 31))
        .await
        .unwrap();
    assert_eq!(in_month.len(), 2);
}

// ---------------------------------------------------------------------------
// Duplicate work items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn manual_duplicate_insert_hits_unique_constraint(pool: PgPool) {
    let deliverable_id = seeded_deliverable(&pool).await;
    let row: (i64, i64) =
        sqlx::query_as("SELECT event_id, template_id FROM event_deliverables WHERE id = $1")
            .bind(deliverable_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = sqlx::query(
        "INSERT INTO event_deliverables (event_id, template_id) VALUES ($1, $2)",
    )
    .bind(row.0)
    .bind(row.1)
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(
                db_err.constraint(),
                Some("uq_event_deliverables_event_template")
            );
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Asset registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn registering_asset_starts_todo_deliverable(pool: PgPool) {
    let deliverable_id = seeded_deliverable(&pool).await;

    let asset = AssetRepo::create_for_deliverable(
        &pool,
        deliverable_id,
        &CreateAsset {
            original_filename: "cube_loop_v1.mp4".to_string(),
            file_path: "assets/2025/event_1/deliv_1/cube_loop_v1.mp4".to_string(),
            file_size_bytes: Some(52_428_800),
            uploaded_by: None,
            notes: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(asset.file_type, "video");

    let deliverable = DeliverableRepo::find_by_id(&pool, deliverable_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deliverable.status, STATUS_IN_PROGRESS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn registering_asset_leaves_later_statuses_alone(pool: PgPool) {
    let deliverable_id = seeded_deliverable(&pool).await;
    sqlx::query("UPDATE event_deliverables SET status = $2 WHERE id = $1")
        .bind(deliverable_id)
        .bind(STATUS_REVIEW)
        .execute(&pool)
        .await
        .unwrap();

    AssetRepo::create_for_deliverable(
        &pool,
        deliverable_id,
        &CreateAsset {
            original_filename: "cube_loop_v2.mp4".to_string(),
            file_path: "assets/2025/event_1/deliv_1/cube_loop_v2.mp4".to_string(),
            file_size_bytes: None,
            uploaded_by: None,
            notes: Some("second pass".to_string()),
        },
    )
    .await
    .unwrap();

    let deliverable = DeliverableRepo::find_by_id(&pool, deliverable_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deliverable.status, STATUS_REVIEW);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assets_list_newest_first(pool: PgPool) {
    let deliverable_id = seeded_deliverable(&pool).await;
    for name in ["v1.png", "v2.png"] {
        AssetRepo::create_for_deliverable(
            &pool,
            deliverable_id,
            &CreateAsset {
                original_filename: name.to_string(),
                file_path: format!("assets/{name}"),
                file_size_bytes: None,
                uploaded_by: None,
                notes: None,
            },
        )
        .await
        .unwrap();
    }

    let assets = AssetRepo::list_for_deliverable(&pool, deliverable_id).await.unwrap();
    assert_eq!(assets.len(), 2);
    assert!(assets[0].created_at >= assets[1].created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn asset_approval_round_trip(pool: PgPool) {
    let deliverable_id = seeded_deliverable(&pool).await;
    let asset = AssetRepo::create_for_deliverable(
        &pool,
        deliverable_id,
        &CreateAsset {
            original_filename: "final_poster.pdf".to_string(),
            file_path: "assets/final_poster.pdf".to_string(),
            file_size_bytes: None,
            uploaded_by: None,
            notes: None,
        },
    )
    .await
    .unwrap();
    assert!(!asset.is_approved);

    let updated = AssetRepo::update(
        &pool,
        asset.id,
        &UpdateAsset {
            notes: Some("signed off by direction".to_string()),
            is_approved: Some(true),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.is_approved);

    let found = AssetRepo::find_by_id(&pool, asset.id).await.unwrap().unwrap();
    assert_eq!(found.notes, "signed off by direction");
    assert_eq!(found.file_type, "pdf");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fresh_deliverable_starts_todo(pool: PgPool) {
    let deliverable_id = seeded_deliverable(&pool).await;
    let deliverable = DeliverableRepo::find_by_id(&pool, deliverable_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deliverable.status, STATUS_TODO);
}
