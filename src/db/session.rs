//! Scoped transactional sessions.
//!
//! # Responsibilities
//! - Acquire the connection for the duration of one unit of work
//! - Commit when the work succeeds, roll back when it fails
//! - Release the connection in both cases
//!
//! # Design Decisions
//! - rusqlite's Transaction rolls back on drop, so the error path
//!   needs no explicit cleanup
//! - The closure is synchronous: nothing inside a session awaits

use rusqlite::Transaction;

use super::{Database, StoreResult};

/// A transactional unit of work. All row operations take one of these.
pub type Session<'conn> = Transaction<'conn>;

impl Database {
    /// Run `f` inside a transaction.
    ///
    /// Commits if `f` returns `Ok`, rolls back if it returns `Err`.
    /// Exactly one session runs at a time; no nesting.
    pub async fn with_session<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Session<'_>) -> StoreResult<T>,
    {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                // Dropping the transaction rolls it back.
                drop(tx);
                Err(err)
            }
        }
    }
}
