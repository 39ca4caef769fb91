use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reel_core::error::CoreError;
use reel_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Not-found and validation failures come from [`CoreError`]; anything the
/// store reports is wrapped together with the generic message the client
/// receives. Response bodies are plain text.
///
/// Validation failures answer `400 Bad Request` rather than the catch-all
/// `500` used for store failures, so clients can tell a bad payload from an
/// outage. Not-found stays `404` and store failures stay `500`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure, reported to the client as `message`.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Entity not found");
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(error = %msg, "Rejected invalid payload");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Store { message, source } => {
                match &source {
                    StoreError::InvalidId(id) => {
                        tracing::warn!(id = %id, "{message}: malformed id");
                    }
                    StoreError::Database(err) => {
                        tracing::error!(error = %err, "{message}");
                    }
                }
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, message).into_response()
    }
}

/// Attach the client-facing message to a store result.
pub trait StoreResultExt<T> {
    fn or_respond(self, message: &'static str) -> AppResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn or_respond(self, message: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Store { message, source })
    }
}
