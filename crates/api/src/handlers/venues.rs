//! Handlers for venue endpoints, including hardware assignment.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use barplan_core::error::CoreError;
use barplan_core::types::DbId;
use barplan_db::models::hardware::HardwareItem;
use barplan_db::models::venue::{CreateVenue, UpdateVenue, Venue};
use barplan_db::repositories::{HardwareRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for venue listing.
#[derive(Debug, Deserialize)]
pub struct VenueListQuery {
    /// Only include active venues (default: false).
    pub active_only: Option<bool>,
}

/// Request body for assigning a hardware item to a venue.
#[derive(Debug, Deserialize)]
pub struct AssignHardwareRequest {
    pub hardware_item_id: DbId,
}

/// GET /venues
pub async fn list_venues(
    State(state): State<AppState>,
    Query(query): Query<VenueListQuery>,
) -> AppResult<Json<DataResponse<Vec<Venue>>>> {
    let venues = VenueRepo::list(&state.pool, query.active_only.unwrap_or(false)).await?;
    Ok(Json(DataResponse { data: venues }))
}

/// POST /venues
pub async fn create_venue(
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<(StatusCode, Json<DataResponse<Venue>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".to_string(),
        )));
    }
    let venue = VenueRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: venue })))
}

/// GET /venues/{id}
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Venue>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Venue", id })?;
    Ok(Json(DataResponse { data: venue }))
}

/// PUT /venues/{id}
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<Json<DataResponse<Venue>>> {
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Venue", id })?;
    Ok(Json(DataResponse { data: venue }))
}

/// DELETE /venues/{id}
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VenueRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Venue", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Hardware assignments
// ---------------------------------------------------------------------------

/// GET /venues/{id}/hardware
pub async fn list_venue_hardware(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<HardwareItem>>>> {
    VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Venue", id })?;
    let hardware = VenueRepo::list_hardware(&state.pool, id).await?;
    Ok(Json(DataResponse { data: hardware }))
}

/// POST /venues/{id}/hardware
///
/// Assign a hardware item to a venue. Idempotent.
pub async fn assign_hardware(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignHardwareRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<HardwareItem>>>)> {
    VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Venue", id })?;
    HardwareRepo::find_by_id(&state.pool, input.hardware_item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Hardware item",
            id: input.hardware_item_id,
        })?;

    VenueRepo::assign_hardware(&state.pool, id, input.hardware_item_id).await?;
    let hardware = VenueRepo::list_hardware(&state.pool, id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: hardware })))
}

/// DELETE /venues/{id}/hardware/{hardware_item_id}
pub async fn remove_hardware(
    State(state): State<AppState>,
    Path((id, hardware_item_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = VenueRepo::remove_hardware(&state.pool, id, hardware_item_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Hardware assignment",
            id: hardware_item_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
