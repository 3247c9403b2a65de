//! Person CRUD HTTP API.
//!
//! A minimal JSON API over a single `person` table backed by SQLite.
//!
//! # Architecture Overview
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │                PERSON API                 │
//!                    │                                           │
//!   JSON Request     │  ┌────────┐   ┌──────────┐   ┌─────────┐ │
//!   ─────────────────┼─▶│  http  │──▶│  person  │──▶│   db    │ │
//!                    │  │ server │   │ validate │   │ session │ │
//!                    │  └────────┘   └──────────┘   └────┬────┘ │
//!                    │                                    │      │
//!   JSON Response    │  ┌────────┐   ┌──────────┐        ▼      │
//!   ◀────────────────┼──│ error  │◀──│   repo   │◀── SQLite     │
//!                    │  │ bodies │   │ (1 row)  │               │
//!                    │  └────────┘   └──────────┘               │
//!                    │                                           │
//!                    │  config: env (PORT, DATABASE_PATH)        │
//!                    └──────────────────────────────────────────┘
//! ```
//!
//! Each request opens exactly one transactional session that commits
//! on success and rolls back on failure. Every failure is converted
//! at the handler boundary into a `{"message", "errors"}` JSON body.

pub mod config;
pub mod db;
pub mod http;
pub mod person;

pub use config::AppConfig;
pub use db::Database;
pub use http::HttpServer;
