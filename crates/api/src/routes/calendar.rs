//! Route definitions for the calendar view.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// Calendar routes mounted at `/calendar`.
///
/// ```text
/// GET /  -> month_view (?year, ?month, ?as_of)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(calendar::month_view))
}
