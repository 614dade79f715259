pub mod assets;
pub mod calendar;
pub mod deliverables;
pub mod events;
pub mod hardware;
pub mod health;
pub mod templates;
pub mod themes;
pub mod users;
pub mod venues;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /calendar                           month view with events and health
///
/// /events                             list, create
/// /events/{id}                        get, update, delete
/// /events/{id}/venues                 attach venue + generate (POST)
/// /events/{id}/venues/{venue_id}      detach venue (DELETE)
/// /events/{id}/deliverables           list deliverables
///
/// /deliverables/{id}                  get, patch (status workflow)
/// /deliverables/{id}/assets           list, register
///
/// /assets/{id}                        patch, delete
///
/// /venues                             list, create
/// /venues/{id}                        get, update, delete
/// /venues/{id}/hardware               list, assign
/// /venues/{id}/hardware/{item_id}     remove (DELETE)
///
/// /hardware                           list, create
/// /hardware/{id}                      get, update, delete
///
/// /templates                          list, create
/// /templates/{id}                     get, update, delete
///
/// /themes                             list, create
/// /themes/current                     active theme for a date (GET)
/// /themes/{id}                        get, update, delete
///
/// /users                              list, create
/// /users/{id}                         get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/calendar", calendar::router())
        .nest("/events", events::router())
        .nest("/deliverables", deliverables::router())
        .nest("/assets", assets::router())
        .nest("/venues", venues::router())
        .nest("/hardware", hardware::router())
        .nest("/templates", templates::router())
        .nest("/themes", themes::router())
        .nest("/users", users::router())
}
