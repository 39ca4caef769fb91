/// Errors raised by a [`MovieStore`](crate::MovieStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The identifier is not a well-formed ObjectId.
    #[error("Invalid movie id: {0}")]
    InvalidId(String),

    /// The MongoDB driver reported a failure (connectivity, write, decode).
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
