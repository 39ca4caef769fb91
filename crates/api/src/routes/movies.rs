//! Route definitions for the movie resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET    /getall          -> list
/// GET    /{id}            -> get_by_id
/// POST   /add             -> create
/// GET    /add             -> get_add_segment (id lookup of "add")
/// PUT    /update/{id}     -> update
/// DELETE /delete/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getall", get(movies::list))
        .route("/{id}", get(movies::get_by_id))
        .route("/add", post(movies::create).get(movies::get_add_segment))
        .route("/update/{id}", put(movies::update))
        .route("/delete/{id}", delete(movies::delete))
}
