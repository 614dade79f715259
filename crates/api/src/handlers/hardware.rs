//! Handlers for the hardware catalog endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use barplan_core::error::CoreError;
use barplan_core::types::DbId;
use barplan_db::models::hardware::{CreateHardwareItem, HardwareItem, UpdateHardwareItem};
use barplan_db::repositories::HardwareRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /hardware
pub async fn list_hardware(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HardwareItem>>>> {
    let items = HardwareRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /hardware
pub async fn create_hardware(
    State(state): State<AppState>,
    Json(input): Json<CreateHardwareItem>,
) -> AppResult<(StatusCode, Json<DataResponse<HardwareItem>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".to_string(),
        )));
    }
    let item = HardwareRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /hardware/{id}
pub async fn get_hardware(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<HardwareItem>>> {
    let item = HardwareRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Hardware item",
            id,
        })?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /hardware/{id}
pub async fn update_hardware(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHardwareItem>,
) -> AppResult<Json<DataResponse<HardwareItem>>> {
    let item = HardwareRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Hardware item",
            id,
        })?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /hardware/{id}
pub async fn delete_hardware(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HardwareRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Hardware item",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
