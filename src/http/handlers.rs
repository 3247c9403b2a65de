//! Request handlers, one per operation.
//!
//! # Responsibilities
//! - Parse the id segment and request body
//! - Run the input validator
//! - Open one session per request and perform the row operation
//!
//! # Design Decisions
//! - Check order is fixed: id-parse → body-shape → field-validation →
//!   existence → persistence; it decides which error surfaces first
//! - The body is taken as a raw String and parsed here, so unparseable
//!   input produces the "non-json input" body instead of a framework
//!   rejection
//! - PATCH is a full replace of the writable fields: optionals absent
//!   from the input become NULL, not a merge with stored values

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::person::model::Person;
use crate::person::{repo, validate};

/// GET /persons/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let id = parse_person_id(&person_id)?;

    let person = state
        .db
        .with_session(|s| repo::find(s, id))
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(person))
}

/// GET /persons/
pub async fn get_all_persons(
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let persons = state.db.with_session(repo::list).await?;
    Ok(Json(persons))
}

/// POST /person/
pub async fn create_person(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let input = parse_body(&body)?;
    let fields = validate(&input).map_err(ApiError::Validation)?;

    let person = state
        .db
        .with_session(move |s| {
            let id = repo::insert(s, &fields)?;
            Ok(fields.into_person(id))
        })
        .await?;

    tracing::debug!(id = person.id, "person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// DELETE /person/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_person_id(&person_id)?;

    let deleted = state
        .db
        .with_session(|s| {
            if repo::find(s, id)?.is_none() {
                return Ok(false);
            }
            repo::delete(s, id)?;
            Ok(true)
        })
        .await?;

    if !deleted {
        return Err(ApiError::NotFound(id));
    }

    tracing::debug!(id, "person deleted");
    Ok(Json(json!({"message": "success"})))
}

/// PATCH /person/{id}
pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    body: String,
) -> Result<Json<Person>, ApiError> {
    let id = parse_person_id(&person_id)?;
    let input = parse_body(&body)?;
    let fields = validate(&input).map_err(ApiError::Validation)?;

    let updated = state
        .db
        .with_session(move |s| {
            if repo::find(s, id)?.is_none() {
                return Ok(None);
            }
            repo::update(s, id, &fields)?;
            // Re-read so the response reflects the stored row.
            repo::find(s, id)
        })
        .await?;

    updated.map(Json).ok_or(ApiError::NotFound(id))
}

/// Parse the id path segment, echoing the raw segment on failure.
fn parse_person_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::BadIdentifier {
        raw: raw.to_string(),
    })
}

/// Parse the request body, requiring a JSON object.
///
/// Unparseable input is echoed back as the raw text; parseable
/// non-object JSON is echoed back as the parsed value.
fn parse_body(raw: &str) -> Result<Value, ApiError> {
    let value = serde_json::from_str::<Value>(raw)
        .unwrap_or_else(|_| Value::String(raw.to_string()));

    if value.is_object() {
        Ok(value)
    } else {
        Err(ApiError::MalformedBody { input: value })
    }
}
