pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /getall              list (GET, at most 10)
/// /{id}                get by id (GET)
/// /add                 create (POST)
/// /update/{id}         replace (PUT)
/// /delete/{id}         delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
