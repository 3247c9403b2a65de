//! SQLite storage bootstrap and scoped sessions.
//!
//! # Data Flow
//! ```text
//! config.database.path
//!     → open.rs (connect, pragmas, idempotent schema)
//!     → Database (shared handle, cloned into AppState)
//!     → session.rs (per-request transaction scope)
//! ```
//!
//! # Design Decisions
//! - One connection shared behind an async mutex; SQLite serializes
//!   writers anyway and the workload is single-row operations
//! - Schema is created at open time with CREATE TABLE IF NOT EXISTS;
//!   there is no migration machinery
//! - Sessions commit on Ok and roll back on Err, always releasing the
//!   connection lock

mod open;
mod session;

use std::sync::Arc;

use rusqlite::Connection;
use thiserror::Error;
use tokio::sync::Mutex;

pub use session::Session;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Shared handle to the SQLite database.
///
/// Cheap to clone; every clone refers to the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}
