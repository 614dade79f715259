//! Handlers for event endpoints.
//!
//! Includes the venue-association operation that triggers deliverable
//! generation: the generator runs synchronously before the association
//! is reported back, so a completed attach always has its work items.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use barplan_core::error::CoreError;
use barplan_core::health::{self, HealthStatus};
use barplan_core::types::{Date, DbId};
use barplan_db::models::deliverable::EventDeliverableDetail;
use barplan_db::models::event::{CreateEvent, Event, UpdateEvent};
use barplan_db::models::venue::Venue;
use barplan_db::repositories::{DeliverableRepo, EventRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{snapshots, today};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for event listing.
#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    /// List events on or after this date (default: `as_of`).
    pub from: Option<Date>,
    /// Date to evaluate health against (default: today, UTC).
    pub as_of: Option<Date>,
}

/// Query parameters for the event detail endpoint.
#[derive(Debug, Deserialize)]
pub struct AsOfQuery {
    pub as_of: Option<Date>,
}

/// Request body for attaching a venue to an event.
#[derive(Debug, Deserialize)]
pub struct AttachVenueRequest {
    pub venue_id: DbId,
}

/// An event with its derived J-7 numbers and health, for list views.
#[derive(Debug, Serialize)]
pub struct EventWithHealth {
    #[serde(flatten)]
    pub event: Event,
    pub deadline: Date,
    pub days_until_deadline: i64,
    pub health: HealthStatus,
}

/// Full event detail: venues, deliverables, and derived health.
#[derive(Debug, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub summary: EventWithHealth,
    pub venues: Vec<Venue>,
    pub deliverables: Vec<EventDeliverableDetail>,
}

/// Result of attaching a venue: the refreshed deliverable set.
#[derive(Debug, Serialize)]
pub struct AttachVenueResponse {
    pub generated: u64,
    pub deliverables: Vec<EventDeliverableDetail>,
}

/// Build the health summary for one event from its loaded deliverables.
async fn with_health(
    state: &AppState,
    event: Event,
    as_of: Date,
) -> AppResult<EventWithHealth> {
    let deliverables = DeliverableRepo::list_for_event(&state.pool, event.id).await?;
    let snaps = snapshots(&deliverables)?;
    Ok(EventWithHealth {
        deadline: health::deadline(event.date),
        days_until_deadline: health::days_until_deadline(event.date, as_of),
        health: health::evaluate(&snaps, event.date, as_of),
        event,
    })
}

// ---------------------------------------------------------------------------
// Event CRUD
// ---------------------------------------------------------------------------

/// GET /events
///
/// List upcoming events with computed health, soonest first.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> AppResult<Json<DataResponse<Vec<EventWithHealth>>>> {
    let as_of = query.as_of.unwrap_or_else(today);
    let from = query.from.unwrap_or(as_of);

    let events = EventRepo::list_upcoming(&state.pool, from).await?;
    let mut out = Vec::with_capacity(events.len());
    for event in events {
        out.push(with_health(&state, event, as_of).await?);
    }
    Ok(Json(DataResponse { data: out }))
}

/// POST /events
///
/// Create an event. When `theme_id` is omitted the active theme period
/// matching the event date is auto-assigned.
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".to_string(),
        )));
    }

    let event = EventRepo::create(&state.pool, &input).await?;
    tracing::info!(event_id = event.id, date = %event.date, "Event created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /events/{id}
///
/// Event detail with venues, deliverables, and health.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<AsOfQuery>,
) -> AppResult<Json<DataResponse<EventDetail>>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;

    let as_of = query.as_of.unwrap_or_else(today);
    let venues = EventRepo::list_venues(&state.pool, id).await?;
    let deliverables = DeliverableRepo::list_for_event(&state.pool, id).await?;
    let snaps = snapshots(&deliverables)?;

    let summary = EventWithHealth {
        deadline: health::deadline(event.date),
        days_until_deadline: health::days_until_deadline(event.date, as_of),
        health: health::evaluate(&snaps, event.date, as_of),
        event,
    };

    Ok(Json(DataResponse {
        data: EventDetail {
            summary,
            venues,
            deliverables,
        },
    }))
}

/// PUT /events/{id}
///
/// Partially update an event.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "name must not be empty".to_string(),
            )));
        }
    }

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /events/{id}
///
/// Delete an event; deliverables and venue associations cascade.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Event", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Venue associations
// ---------------------------------------------------------------------------

/// POST /events/{id}/venues
///
/// Attach a venue and synchronously generate its deliverable work items.
/// Idempotent end to end: re-attaching never duplicates deliverables.
pub async fn attach_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AttachVenueRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AttachVenueResponse>>)> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;
    VenueRepo::find_by_id(&state.pool, input.venue_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Venue",
            id: input.venue_id,
        })?;

    EventRepo::attach_venue(&state.pool, id, input.venue_id).await?;
    let generated =
        DeliverableRepo::generate_for_venue(&state.pool, id, input.venue_id).await?;
    tracing::info!(
        event_id = id,
        venue_id = input.venue_id,
        generated,
        "Venue attached to event"
    );

    let deliverables = DeliverableRepo::list_for_event(&state.pool, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AttachVenueResponse {
                generated,
                deliverables,
            },
        }),
    ))
}

/// DELETE /events/{id}/venues/{venue_id}
///
/// Detach a venue from an event. Deliverables generated for the venue's
/// templates are deliberately kept.
pub async fn detach_venue(
    State(state): State<AppState>,
    Path((id, venue_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = EventRepo::detach_venue(&state.pool, id, venue_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Venue association",
            id: venue_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /events/{id}/deliverables
///
/// List an event's deliverables joined with template data.
pub async fn list_event_deliverables(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<EventDeliverableDetail>>>> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;

    let deliverables = DeliverableRepo::list_for_event(&state.pool, id).await?;
    Ok(Json(DataResponse { data: deliverables }))
}
