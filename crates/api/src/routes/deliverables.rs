//! Route definitions for deliverable work items and their assets.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, deliverables};
use crate::state::AppState;

/// Deliverable routes mounted at `/deliverables`.
///
/// ```text
/// GET   /{id}         -> get_deliverable
/// PATCH /{id}         -> update_deliverable
/// GET   /{id}/assets  -> list_assets
/// POST  /{id}/assets  -> register_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(deliverables::get_deliverable).patch(deliverables::update_deliverable),
        )
        .route(
            "/{id}/assets",
            get(assets::list_assets).post(assets::register_asset),
        )
}
