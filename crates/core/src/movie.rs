//! Movie entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Entity name used in not-found errors and log fields.
pub const MOVIE_ENTITY: &str = "Movie";

/// A stored movie record.
///
/// The identifier is the store-assigned id rendered as a string and is
/// serialized as `_id` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}

/// Raw request payload for creating or replacing a movie.
///
/// Every field is optional at the deserialization level so that a missing
/// `title` or `year` surfaces as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MovieInput {
    #[validate(required, custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    #[validate(required)]
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub director: Option<String>,
}

/// A validated movie payload, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub genre: Option<String>,
    pub director: Option<String>,
}

impl MovieInput {
    /// Validate the payload and convert it into a [`NewMovie`].
    ///
    /// Returns [`CoreError::Validation`] naming every offending field.
    pub fn into_new_movie(self) -> Result<NewMovie, CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(describe_errors(&errors)))?;

        let (Some(title), Some(year)) = (self.title, self.year) else {
            return Err(CoreError::Validation(
                "Invalid or missing fields: title, year".to_string(),
            ));
        };

        Ok(NewMovie {
            title,
            year,
            genre: self.genre,
            director: self.director,
        })
    }
}

impl NewMovie {
    /// Attach a store-assigned identifier.
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            director: self.director,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Render validation errors as `Invalid or missing fields: a, b`.
///
/// Field names are sorted so the message is stable.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    format!("Invalid or missing fields: {}", fields.join(", "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
