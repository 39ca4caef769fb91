//! Request body extraction for movie payloads.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use reel_core::error::CoreError;
use reel_core::movie::MovieInput;

use crate::error::AppError;

/// A movie payload sent either as JSON or as an urlencoded form.
///
/// Any body that cannot be decoded becomes a [`CoreError::Validation`].
#[derive(Debug)]
pub struct MoviePayload(pub MovieInput);

impl<S> FromRequest<S> for MoviePayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(input) = Form::<MovieInput>::from_request(req, state)
                .await
                .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
            Ok(Self(input))
        } else {
            let Json(input) = Json::<MovieInput>::from_request(req, state)
                .await
                .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
            Ok(Self(input))
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}
