//! Handlers for user endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use barplan_core::error::CoreError;
use barplan_core::roles::validate_role;
use barplan_core::types::DbId;
use barplan_db::models::user::{CreateUser, UpdateUser, User};
use barplan_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username is required".to_string(),
        )));
    }
    if let Some(role) = &input.role {
        validate_role(role).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<User>>> {
    if let Some(role) = &input.role {
        validate_role(role).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    Ok(Json(DataResponse { data: user }))
}
