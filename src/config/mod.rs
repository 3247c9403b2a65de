//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (PORT, DATABASE_PATH)
//!     → loader.rs (read & parse)
//!     → AppConfig (validated, immutable)
//!     → injected into db + http subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults so the process runs with an empty env
//! - Port and database path come from the environment, not flags

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::{AppConfig, DatabaseConfig, ListenerConfig};
