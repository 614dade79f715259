//! Route definitions for theme periods.

use axum::routing::get;
use axum::Router;

use crate::handlers::themes;
use crate::state::AppState;

/// Theme period routes mounted at `/themes`.
///
/// ```text
/// GET    /         -> list_themes
/// POST   /         -> create_theme
/// GET    /current  -> current_theme
/// GET    /{id}     -> get_theme
/// PUT    /{id}     -> update_theme
/// DELETE /{id}     -> delete_theme
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(themes::list_themes).post(themes::create_theme))
        .route("/current", get(themes::current_theme))
        .route(
            "/{id}",
            get(themes::get_theme)
                .put(themes::update_theme)
                .delete(themes::delete_theme),
        )
}
