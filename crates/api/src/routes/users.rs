//! Route definitions for users.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// Users are deactivated via PUT (`is_active: false`), never deleted;
/// deliverable assignment history must survive.
///
/// ```text
/// GET  /      -> list_users
/// POST /      -> create_user
/// GET  /{id}  -> get_user
/// PUT  /{id}  -> update_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", get(users::get_user).put(users::update_user))
}
