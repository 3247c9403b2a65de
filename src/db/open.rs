//! Connection bootstrap for SQLite.
//!
//! # Responsibilities
//! - Open file or in-memory connections
//! - Configure connection pragmas
//! - Create the person table idempotently before returning

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rusqlite::Connection;
use tokio::sync::Mutex;

use super::{Database, StoreResult};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS person (
    id      INTEGER PRIMARY KEY,
    name    TEXT NOT NULL,
    age     INTEGER,
    address TEXT,
    work    TEXT
);";

impl Database {
    /// Open a SQLite database file and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        let db = Self::bootstrap(conn)?;
        tracing::info!(path = %path.as_ref().display(), "database opened");
        Ok(db)
    }

    /// Open an in-memory SQLite database and ensure the schema exists.
    ///
    /// Used by tests; the data lives only as long as the handle.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self::bootstrap(conn)?;
        tracing::info!("in-memory database opened");
        Ok(db)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_schema() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.conn.try_lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM person", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_open_is_idempotent() {
        let file = tempfile::NamedTempFile::new().unwrap();
        {
            let db = Database::open(file.path()).unwrap();
            let conn = db.conn.try_lock().unwrap();
            conn.execute("INSERT INTO person (name) VALUES ('John')", [])
                .unwrap();
        }

        // Re-opening must not recreate the table or lose rows.
        let db = Database::open(file.path()).unwrap();
        let conn = db.conn.try_lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM person", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
