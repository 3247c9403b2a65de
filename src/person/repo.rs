//! Single-row SQL operations on the person table.
//!
//! # Responsibilities
//! - Map between person rows and the entity structs
//! - Keep every statement inside the caller's session
//!
//! # Design Decisions
//! - Free functions over a `Session`, not a repository object: the
//!   table is flat and every handler opens exactly one session
//! - List order is SQLite natural order; not an API contract

use rusqlite::{params, OptionalExtension};

use crate::db::{Session, StoreResult};
use crate::person::model::{Person, PersonInput};

const PROJECTION: &str = "SELECT id, name, age, address, work FROM person";

/// Look up one person by id.
pub fn find(session: &Session<'_>, id: i64) -> StoreResult<Option<Person>> {
    let person = session
        .query_row(
            "SELECT id, name, age, address, work FROM person WHERE id = ?1",
            params![id],
            Person::from_row,
        )
        .optional()?;
    Ok(person)
}

/// Fetch every person row.
pub fn list(session: &Session<'_>) -> StoreResult<Vec<Person>> {
    let mut stmt = session.prepare(PROJECTION)?;
    let rows = stmt.query_map([], Person::from_row)?;
    let mut persons = Vec::new();
    for row in rows {
        persons.push(row?);
    }
    Ok(persons)
}

/// Insert a new person and return the engine-assigned id.
pub fn insert(session: &Session<'_>, input: &PersonInput) -> StoreResult<i64> {
    session.execute(
        "INSERT INTO person (name, age, address, work) VALUES (?1, ?2, ?3, ?4)",
        params![input.name, input.age, input.address, input.work],
    )?;
    Ok(session.last_insert_rowid())
}

/// Overwrite all writable fields of a person. Full replace: optionals
/// absent from the input are written as NULL.
pub fn update(session: &Session<'_>, id: i64, input: &PersonInput) -> StoreResult<usize> {
    let changed = session.execute(
        "UPDATE person SET name = ?2, age = ?3, address = ?4, work = ?5 WHERE id = ?1",
        params![id, input.name, input.age, input.address, input.work],
    )?;
    Ok(changed)
}

/// Remove a person row permanently.
pub fn delete(session: &Session<'_>, id: i64) -> StoreResult<()> {
    session.execute("DELETE FROM person WHERE id = ?1", params![id])?;
    Ok(())
}
