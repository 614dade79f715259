//! Route definitions for the hardware catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::hardware;
use crate::state::AppState;

/// Hardware catalog routes mounted at `/hardware`.
///
/// ```text
/// GET    /      -> list_hardware
/// POST   /      -> create_hardware
/// GET    /{id}  -> get_hardware
/// PUT    /{id}  -> update_hardware
/// DELETE /{id}  -> delete_hardware
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hardware::list_hardware).post(hardware::create_hardware))
        .route(
            "/{id}",
            get(hardware::get_hardware)
                .put(hardware::update_hardware)
                .delete(hardware::delete_hardware),
        )
}
