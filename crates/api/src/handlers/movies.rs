//! Handlers for the movie resource under `/api`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::HeaderMap;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::movie::{Movie, MOVIE_ENTITY};
use reel_core::pagination::ListParams;

use crate::error::{AppError, AppResult, StoreResultExt};
use crate::extract::MoviePayload;
use crate::state::AppState;

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: MOVIE_ENTITY,
        id,
    })
}

/// GET /api/getall
///
/// At most ten records, in store order. A query string that does not
/// decode is ignored and the default page is served.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring undecodable list query");
            ListParams::default()
        }
    };
    let movies = state
        .store
        .list(params.page())
        .await
        .or_respond("Error fetching movies")?;
    Ok(Json(movies))
}

/// GET /api/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    find_movie(&state, &id).await
}

/// GET /api/add
///
/// `/add` is a static route, so a GET on it never reaches `/{id}`. Look up
/// the literal segment the same way.
pub async fn get_add_segment(State(state): State<AppState>) -> AppResult<Json<Movie>> {
    find_movie(&state, "add").await
}

async fn find_movie(state: &AppState, id: &str) -> AppResult<Json<Movie>> {
    let movie = state
        .store
        .find_by_id(id)
        .await
        .or_respond("Error fetching movie by ID")?
        .ok_or_else(|| not_found(id.to_string()))?;
    Ok(Json(movie))
}

/// POST /api/add
///
/// Responds with a text confirmation and a `Location` header pointing at the
/// new record.
pub async fn create(
    State(state): State<AppState>,
    MoviePayload(input): MoviePayload,
) -> AppResult<(HeaderMap, String)> {
    let input = input.into_new_movie()?;
    let movie = state
        .store
        .create(&input)
        .await
        .or_respond("Error adding movie")?;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie added");

    let mut headers = HeaderMap::new();
    if let Ok(location) = format!("/api/{}", movie.id).parse() {
        headers.insert(LOCATION, location);
    }
    Ok((headers, format!("Movie added successfully: {}", movie.title)))
}

/// PUT /api/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    MoviePayload(input): MoviePayload,
) -> AppResult<&'static str> {
    let input = input.into_new_movie()?;
    state
        .store
        .update(&id, &input)
        .await
        .or_respond("Error updating movie")?
        .ok_or_else(|| not_found(id.clone()))?;
    tracing::info!(movie_id = %id, "Movie updated");
    Ok("Movie updated successfully")
}

/// DELETE /api/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<&'static str> {
    let deleted = state
        .store
        .delete(&id)
        .await
        .or_respond("Error deleting movie")?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(movie_id = %id, "Movie deleted");
    Ok("Movie deleted successfully")
}
