//! Error-to-response mapping.
//!
//! # Responsibilities
//! - Represent every client-visible failure as one enum
//! - Convert failures into the JSON error body at the handler boundary
//!
//! # Design Decisions
//! - 400 bodies carry {"message", "errors"}; 404 carries message only
//! - Persistence failures map to 400, not 500: all failures surface as
//!   client-attributable (preserved from the reference behavior)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::db::StoreError;
use crate::person::FieldError;

/// A request failure, in the order handlers check for them:
/// id-parse, body-shape, field-validation, existence, persistence.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path segment was not a valid integer.
    #[error("bad person id")]
    BadIdentifier { raw: String },

    /// Request body was not a JSON object.
    #[error("non-json input")]
    MalformedBody { input: Value },

    /// Body was an object but failed field-shape rules.
    #[error("bad input json")]
    Validation(Vec<FieldError>),

    /// Well-formed id referring to no existing row.
    #[error("Person with id={0} not found")]
    NotFound(i64),

    /// The storage engine raised on write.
    #[error("database error")]
    Persistence(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadIdentifier { raw } => (
                StatusCode::BAD_REQUEST,
                json!({"message": "bad person id", "errors": {"person_id": raw}}),
            ),
            ApiError::MalformedBody { input } => (
                StatusCode::BAD_REQUEST,
                json!({"message": "non-json input", "errors": {"input": input}}),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({"message": "bad input json", "errors": {"validation errors": errors}}),
            ),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({"message": format!("Person with id={id} not found")}),
            ),
            ApiError::Persistence(err) => {
                let mut errors = serde_json::Map::new();
                errors.insert(err.to_string(), Value::String(format!("{err:?}")));
                (
                    StatusCode::BAD_REQUEST,
                    json!({"message": "database error", "errors": errors}),
                )
            }
        };

        if status == StatusCode::BAD_REQUEST {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}
