//! Record store adapter for the `movies` collection.
//!
//! Handlers talk to a [`MovieStore`]; production wires in
//! [`MongoMovieStore`], tests and local runs can use [`InMemoryMovieStore`].

pub mod error;
pub mod memory;
pub mod mongo;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryMovieStore;
pub use mongo::{MongoMovieStore, MongoSettings};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use reel_core::movie::{Movie, NewMovie};
use reel_core::pagination::Page;

/// CRUD operations over the movie collection.
///
/// Identifiers are passed as the client sent them; implementations reject
/// malformed ones with [`StoreError::InvalidId`].
#[async_trait]
pub trait MovieStore: Send + Sync + 'static {
    /// Round-trip to the backing store. Used for readiness and `/health`.
    async fn ping(&self) -> StoreResult<()>;

    /// Return at most `page.limit` records, in store order.
    async fn list(&self, page: Page) -> StoreResult<Vec<Movie>>;

    /// Returns `None` if no record has the given id.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Movie>>;

    /// Insert a new record, returning it with its assigned id.
    async fn create(&self, input: &NewMovie) -> StoreResult<Movie>;

    /// Replace the four fields of an existing record.
    ///
    /// Returns the updated record, or `None` if no record has the given id.
    async fn update(&self, id: &str, input: &NewMovie) -> StoreResult<Option<Movie>>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// Parse a client-supplied identifier into an [`ObjectId`].
pub fn parse_movie_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
