//! Person record shape and its JSON projection.

use rusqlite::Row;
use serde::Serialize;

/// A persisted person row.
///
/// Serialization is the client-facing projection: absent optionals
/// serialize as explicit nulls, never omitted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Engine-assigned id, immutable after creation.
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub address: Option<String>,
    pub work: Option<String>,
}

impl Person {
    /// Map a full `SELECT id, name, age, address, work` row.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            address: row.get(3)?,
            work: row.get(4)?,
        })
    }
}

/// Validated writable fields of a person.
///
/// Produced by the validator; `id` is deliberately absent since the
/// storage engine assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInput {
    pub name: String,
    pub age: Option<i64>,
    pub address: Option<String>,
    pub work: Option<String>,
}

impl PersonInput {
    /// The projection of this input once the engine has assigned `id`.
    pub fn into_person(self, id: i64) -> Person {
        Person {
            id,
            name: self.name,
            age: self.age,
            address: self.address,
            work: self.work,
        }
    }
}
