//! HTTP surface of the person API.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, routes)
//!     → handlers.rs (parse id/body → validate → session → respond)
//!     → error.rs (every failure becomes a {"message","errors"} body)
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
