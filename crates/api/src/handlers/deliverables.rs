//! Handlers for deliverable work-item endpoints.
//!
//! Status changes are checked against the workflow state machine before
//! touching the database; everything else on the row is a plain patch.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use barplan_core::deliverable::{validate_transition, DeliverableStatus};
use barplan_core::error::CoreError;
use barplan_core::health;
use barplan_core::types::{Date, DbId};
use barplan_db::models::deliverable::{EventDeliverable, UpdateEventDeliverable};
use barplan_db::repositories::{DeliverableRepo, EventRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::today;
use crate::response::DataResponse;
use crate::state::AppState;

/// A deliverable with its per-item lateness flag.
#[derive(Debug, Serialize)]
pub struct DeliverableWithLateness {
    #[serde(flatten)]
    pub deliverable: EventDeliverable,
    pub is_late: bool,
    pub event_date: Date,
}

/// GET /deliverables/{id}
///
/// Single work item with its lateness computed against today.
pub async fn get_deliverable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeliverableWithLateness>>> {
    let deliverable = DeliverableRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Deliverable",
            id,
        })?;

    let event = EventRepo::find_by_id(&state.pool, deliverable.event_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Event",
            id: deliverable.event_id,
        })?;

    let status = DeliverableStatus::from_str_value(&deliverable.status)
        .map_err(AppError::InternalError)?;
    let snapshot = health::DeliverableSnapshot {
        status,
        is_enabled: deliverable.is_enabled,
    };
    let is_late = health::is_late(event.date, today(), &snapshot);

    Ok(Json(DataResponse {
        data: DeliverableWithLateness {
            deliverable,
            is_late,
            event_date: event.date,
        },
    }))
}

/// PATCH /deliverables/{id}
///
/// Update status, assignee, enabled/starred flags, or notes.
pub async fn update_deliverable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEventDeliverable>,
) -> AppResult<Json<DataResponse<EventDeliverable>>> {
    let current = DeliverableRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Deliverable",
            id,
        })?;

    if let Some(next) = &input.status {
        let from = DeliverableStatus::from_str_value(&current.status)
            .map_err(AppError::InternalError)?;
        let to = DeliverableStatus::from_str_value(next)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
        validate_transition(from, to)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    if let Some(user_id) = input.assigned_to {
        UserRepo::find_by_id(&state.pool, user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?;
    }

    let updated = DeliverableRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Deliverable",
            id,
        })?;

    if let Some(status) = &input.status {
        tracing::info!(deliverable_id = id, status, "Deliverable status changed");
    }

    Ok(Json(DataResponse { data: updated }))
}
