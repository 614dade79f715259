//! Handlers for theme period endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use barplan_core::error::CoreError;
use barplan_core::theme::{validate_month, PeriodKey};
use barplan_core::types::{Date, DbId};
use barplan_db::models::theme::{CreateThemePeriod, ThemePeriod, UpdateThemePeriod};
use barplan_db::repositories::ThemeRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::today;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the current-theme lookup.
#[derive(Debug, Deserialize)]
pub struct CurrentThemeQuery {
    /// Date whose (month, year) period to resolve (default: today, UTC).
    pub on: Option<Date>,
}

/// GET /themes
pub async fn list_themes(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ThemePeriod>>>> {
    let themes = ThemeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// GET /themes/current
///
/// Active theme for a date's (month, year) period, or null.
pub async fn current_theme(
    State(state): State<AppState>,
    Query(query): Query<CurrentThemeQuery>,
) -> AppResult<Json<DataResponse<Option<ThemePeriod>>>> {
    let on = query.on.unwrap_or_else(today);
    let theme = ThemeRepo::find_for_period(&state.pool, PeriodKey::for_date(on)).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// POST /themes
pub async fn create_theme(
    State(state): State<AppState>,
    Json(input): Json<CreateThemePeriod>,
) -> AppResult<(StatusCode, Json<DataResponse<ThemePeriod>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".to_string(),
        )));
    }
    validate_month(input.month).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let theme = ThemeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        theme_id = theme.id,
        month = theme.month,
        year = theme.year,
        "Theme period created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: theme })))
}

/// GET /themes/{id}
pub async fn get_theme(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ThemePeriod>>> {
    let theme = ThemeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Theme", id })?;
    Ok(Json(DataResponse { data: theme }))
}

/// PUT /themes/{id}
pub async fn update_theme(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateThemePeriod>,
) -> AppResult<Json<DataResponse<ThemePeriod>>> {
    let theme = ThemeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Theme", id })?;
    Ok(Json(DataResponse { data: theme }))
}

/// DELETE /themes/{id}
pub async fn delete_theme(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ThemeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Theme", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
