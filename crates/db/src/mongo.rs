//! MongoDB-backed [`MovieStore`].

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection, Database};
use reel_core::movie::{Movie, NewMovie};
use reel_core::pagination::Page;
use serde::{Deserialize, Serialize};

use crate::{parse_movie_id, MovieStore, StoreResult};

/// Collection holding movie documents.
pub const MOVIES_COLLECTION: &str = "movies";

/// Database used when neither the settings nor the URI name one.
pub const DEFAULT_DATABASE: &str = "test";

/// Connection settings for [`MongoMovieStore::connect`].
#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    /// Overrides the database named in the URI.
    pub database: Option<String>,
    pub max_pool_size: u32,
    pub app_name: String,
}

/// On-disk shape of a movie document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MovieDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    director: Option<String>,
}

impl MovieDocument {
    fn new(id: ObjectId, input: &NewMovie) -> Self {
        Self {
            id,
            title: input.title.clone(),
            year: input.year,
            genre: input.genre.clone(),
            director: input.director.clone(),
        }
    }
}

impl From<MovieDocument> for Movie {
    fn from(doc: MovieDocument) -> Self {
        Movie {
            id: doc.id.to_hex(),
            title: doc.title,
            year: doc.year,
            genre: doc.genre,
            director: doc.director,
        }
    }
}

/// Movie store over a pooled MongoDB client.
///
/// The driver's `Client` owns the connection pool and is safe to share
/// across concurrent requests.
#[derive(Clone)]
pub struct MongoMovieStore {
    database: Database,
    movies: Collection<MovieDocument>,
}

impl MongoMovieStore {
    /// Build a client from `settings` and bind to the movie collection.
    ///
    /// The driver connects lazily; call [`MovieStore::ping`] to confirm the
    /// server is reachable.
    pub async fn connect(settings: &MongoSettings) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&settings.uri).await?;
        options.app_name = Some(settings.app_name.clone());
        options.max_pool_size = Some(settings.max_pool_size);

        let client = Client::with_options(options)?;
        let database = match &settings.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        tracing::debug!(database = %database.name(), "MongoDB client created");

        Ok(Self::from_database(database))
    }

    /// Wrap an existing database handle.
    pub fn from_database(database: Database) -> Self {
        let movies = database.collection::<MovieDocument>(MOVIES_COLLECTION);
        Self { database, movies }
    }
}

#[async_trait]
impl MovieStore for MongoMovieStore {
    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn list(&self, page: Page) -> StoreResult<Vec<Movie>> {
        let cursor = self
            .movies
            .find(doc! {})
            .skip(page.offset)
            .limit(page.limit)
            .await?;
        let docs: Vec<MovieDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Movie>> {
        let oid = parse_movie_id(id)?;
        let found = self.movies.find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Movie::from))
    }

    async fn create(&self, input: &NewMovie) -> StoreResult<Movie> {
        let document = MovieDocument::new(ObjectId::new(), input);
        self.movies.insert_one(&document).await?;
        tracing::debug!(movie_id = %document.id, "Inserted movie document");
        Ok(document.into())
    }

    async fn update(&self, id: &str, input: &NewMovie) -> StoreResult<Option<Movie>> {
        let oid = parse_movie_id(id)?;
        let updated = self
            .movies
            .find_one_and_update(doc! { "_id": oid }, replacement_update(input))
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(Movie::from))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let oid = parse_movie_id(id)?;
        let result = self.movies.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}

/// Build an update document that replaces all four movie fields.
///
/// Absent optional fields are `$unset` so the stored record matches the
/// payload exactly. `$unset` is omitted when there is nothing to remove.
fn replacement_update(input: &NewMovie) -> Document {
    let mut set = doc! {
        "title": input.title.as_str(),
        "year": input.year,
    };
    let mut unset = Document::new();

    for (field, value) in [("genre", &input.genre), ("director", &input.director)] {
        match value {
            Some(v) => {
                set.insert(field, v.as_str());
            }
            None => {
                unset.insert(field, "");
            }
        }
    }

    let mut update = doc! { "$set": set };
    if !unset.is_empty() {
        update.insert("$unset", unset);
    }
    update
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn new_movie(genre: Option<&str>, director: Option<&str>) -> NewMovie {
        NewMovie {
            title: "Dune".into(),
            year: 2021,
            genre: genre.map(str::to_string),
            director: director.map(str::to_string),
        }
    }

    #[test]
    fn update_sets_all_present_fields() {
        let update = replacement_update(&new_movie(Some("Sci-Fi"), Some("Villeneuve")));

        assert_eq!(
            update,
            doc! {
                "$set": {
                    "title": "Dune",
                    "year": 2021,
                    "genre": "Sci-Fi",
                    "director": "Villeneuve",
                }
            }
        );
    }

    #[test]
    fn update_unsets_absent_optional_fields() {
        let update = replacement_update(&new_movie(None, Some("Villeneuve")));

        assert_eq!(
            update,
            doc! {
                "$set": { "title": "Dune", "year": 2021, "director": "Villeneuve" },
                "$unset": { "genre": "" },
            }
        );
    }

    #[test]
    fn document_converts_to_movie_with_hex_id() {
        let oid = ObjectId::new();
        let movie: Movie = MovieDocument::new(oid, &new_movie(None, None)).into();

        assert_eq!(movie.id, oid.to_hex());
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.genre, None);
    }
}
