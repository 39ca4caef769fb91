//! In-process [`MovieStore`] used by the integration tests and for running
//! the API without a database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use reel_core::movie::{Movie, NewMovie};
use reel_core::pagination::Page;
use tokio::sync::RwLock;

use crate::{parse_movie_id, MovieStore, StoreResult};

/// Movie store backed by a vector in insertion order.
///
/// Identifiers are real ObjectIds so malformed ids are rejected exactly as
/// they are by [`MongoMovieStore`](crate::MongoMovieStore).
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list(&self, page: Page) -> StoreResult<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .skip(page.offset as usize)
            .take(page.limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Movie>> {
        let oid = parse_movie_id(id)?.to_hex();
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == oid).cloned())
    }

    async fn create(&self, input: &NewMovie) -> StoreResult<Movie> {
        let movie = input.clone().into_movie(ObjectId::new().to_hex());
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: &str, input: &NewMovie) -> StoreResult<Option<Movie>> {
        let oid = parse_movie_id(id)?.to_hex();
        let mut movies = self.movies.write().await;
        let Some(slot) = movies.iter_mut().find(|m| m.id == oid) else {
            return Ok(None);
        };
        *slot = input.clone().into_movie(oid);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let oid = parse_movie_id(id)?.to_hex();
        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|m| m.id != oid);
        Ok(movies.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
