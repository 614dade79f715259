//! Route definitions for events and their venue associations.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Event routes mounted at `/events`.
///
/// ```text
/// GET    /                        -> list_events
/// POST   /                        -> create_event
/// GET    /{id}                    -> get_event
/// PUT    /{id}                    -> update_event
/// DELETE /{id}                    -> delete_event
/// POST   /{id}/venues             -> attach_venue (generates deliverables)
/// DELETE /{id}/venues/{venue_id}  -> detach_venue
/// GET    /{id}/deliverables       -> list_event_deliverables
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route(
            "/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/{id}/venues", post(events::attach_venue))
        .route("/{id}/venues/{venue_id}", delete(events::detach_venue))
        .route("/{id}/deliverables", get(events::list_event_deliverables))
}
