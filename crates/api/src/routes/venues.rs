//! Route definitions for venues and their hardware assignments.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::venues;
use crate::state::AppState;

/// Venue routes mounted at `/venues`.
///
/// ```text
/// GET    /                          -> list_venues
/// POST   /                          -> create_venue
/// GET    /{id}                      -> get_venue
/// PUT    /{id}                      -> update_venue
/// DELETE /{id}                      -> delete_venue
/// GET    /{id}/hardware             -> list_venue_hardware
/// POST   /{id}/hardware             -> assign_hardware
/// DELETE /{id}/hardware/{item_id}   -> remove_hardware
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venues::list_venues).post(venues::create_venue))
        .route(
            "/{id}",
            get(venues::get_venue)
                .put(venues::update_venue)
                .delete(venues::delete_venue),
        )
        .route(
            "/{id}/hardware",
            get(venues::list_venue_hardware).post(venues::assign_hardware),
        )
        .route(
            "/{id}/hardware/{hardware_item_id}",
            delete(venues::remove_hardware),
        )
}
