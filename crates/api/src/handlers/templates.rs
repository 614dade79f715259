//! Handlers for deliverable template endpoints.
//!
//! Category strings are validated at the boundary; the database CHECK
//! constraint is the backstop.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use barplan_core::deliverable::validate_category;
use barplan_core::error::CoreError;
use barplan_core::types::DbId;
use barplan_db::models::template::{
    CreateDeliverableTemplate, DeliverableTemplate, UpdateDeliverableTemplate,
};
use barplan_db::repositories::{TemplateRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /templates
pub async fn list_templates(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DeliverableTemplate>>>> {
    let templates = TemplateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// POST /templates
pub async fn create_template(
    State(state): State<AppState>,
    Json(input): Json<CreateDeliverableTemplate>,
) -> AppResult<(StatusCode, Json<DataResponse<DeliverableTemplate>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".to_string(),
        )));
    }
    validate_category(&input.category)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if let Some(venue_id) = input.venue_id {
        VenueRepo::find_by_id(&state.pool, venue_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Venue",
                id: venue_id,
            })?;
    }

    let template = TemplateRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// GET /templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeliverableTemplate>>> {
    let template = TemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Template",
            id,
        })?;
    Ok(Json(DataResponse { data: template }))
}

/// PUT /templates/{id}
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeliverableTemplate>,
) -> AppResult<Json<DataResponse<DeliverableTemplate>>> {
    if let Some(category) = &input.category {
        validate_category(category)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let template = TemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Template",
            id,
        })?;
    Ok(Json(DataResponse { data: template }))
}

/// DELETE /templates/{id}
///
/// Existing deliverables keep a reference to the template; deletion is
/// rejected by the FK while any exist.
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TemplateRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
