//! Handlers for asset metadata endpoints.
//!
//! Registration records upload metadata only; the byte storage lives
//! elsewhere. The first asset registered against a fresh work item
//! moves it from `todo` to `in_progress`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use barplan_core::error::CoreError;
use barplan_core::types::DbId;
use barplan_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use barplan_db::repositories::{AssetRepo, DeliverableRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /deliverables/{id}/assets
///
/// List a deliverable's assets, newest first.
pub async fn list_assets(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    DeliverableRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Deliverable",
            id,
        })?;

    let assets = AssetRepo::list_for_deliverable(&state.pool, id).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// POST /deliverables/{id}/assets
///
/// Register an uploaded asset against a deliverable.
pub async fn register_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<DataResponse<Asset>>)> {
    if input.original_filename.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "original_filename is required".to_string(),
        )));
    }
    if let Some(size) = input.file_size_bytes {
        if size < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "file_size_bytes must not be negative".to_string(),
            )));
        }
    }

    DeliverableRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Deliverable",
            id,
        })?;

    let asset = AssetRepo::create_for_deliverable(&state.pool, id, &input).await?;
    tracing::info!(
        asset_id = asset.id,
        deliverable_id = id,
        file_type = %asset.file_type,
        "Asset registered"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// PATCH /assets/{id}
///
/// Update an asset's notes or approval flag.
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Asset", id })?;
    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /assets/{id}
///
/// Remove an asset's metadata row.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Asset", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
