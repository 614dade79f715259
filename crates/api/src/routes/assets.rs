//! Route definitions for asset metadata.

use axum::routing::patch;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// Listing and registration live under `/deliverables/{id}/assets`.
///
/// ```text
/// PATCH  /{id}  -> update_asset
/// DELETE /{id}  -> delete_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        patch(assets::update_asset).delete(assets::delete_asset),
    )
}
