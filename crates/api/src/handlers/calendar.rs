//! Handler for the calendar month view.
//!
//! Returns the Monday-first week grid plus the month's events grouped by
//! day, each with computed health, and the theme period for that month.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use barplan_core::calendar::{month_bounds, month_grid, next_month, prev_month, Week};
use barplan_core::error::CoreError;
use barplan_core::health;
use barplan_core::theme::PeriodKey;
use barplan_core::types::Date;
use barplan_db::models::theme::ThemePeriod;
use barplan_db::repositories::{DeliverableRepo, EventRepo, ThemeRepo};

use crate::error::AppResult;
use crate::handlers::events::EventWithHealth;
use crate::handlers::{snapshots, today};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the calendar view.
///
/// Year and month default to the `as_of` date's month.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub as_of: Option<Date>,
}

/// The calendar month view payload.
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    /// Monday-first week rows; 0 marks cells of the adjacent month.
    pub weeks: Vec<Week>,
    /// Events keyed by day of month.
    pub events_by_day: BTreeMap<u32, Vec<EventWithHealth>>,
    /// Theme period covering this month, if one is configured.
    pub theme: Option<ThemePeriod>,
    pub prev: (i32, u32),
    pub next: (i32, u32),
}

/// GET /calendar
///
/// Month view with events and health indicators.
pub async fn month_view(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<DataResponse<CalendarResponse>>> {
    let as_of = query.as_of.unwrap_or_else(today);
    let year = query.year.unwrap_or_else(|| as_of.year());
    let month = query.month.unwrap_or_else(|| as_of.month());

    let weeks = month_grid(year, month).map_err(CoreError::Validation)?;
    let (first, last) = month_bounds(year, month).map_err(CoreError::Validation)?;

    let events = EventRepo::list_between(&state.pool, first, last).await?;
    let mut events_by_day: BTreeMap<u32, Vec<EventWithHealth>> = BTreeMap::new();
    for event in events {
        let deliverables = DeliverableRepo::list_for_event(&state.pool, event.id).await?;
        let snaps = snapshots(&deliverables)?;
        let day = event.date.day();
        events_by_day.entry(day).or_default().push(EventWithHealth {
            deadline: health::deadline(event.date),
            days_until_deadline: health::days_until_deadline(event.date, as_of),
            health: health::evaluate(&snaps, event.date, as_of),
            event,
        });
    }

    let theme = ThemeRepo::find_for_period(
        &state.pool,
        PeriodKey {
            month: month as i16,
            year,
        },
    )
    .await?;

    Ok(Json(DataResponse {
        data: CalendarResponse {
            year,
            month,
            weeks,
            events_by_day,
            theme,
            prev: prev_month(year, month),
            next: next_month(year, month),
        },
    }))
}
