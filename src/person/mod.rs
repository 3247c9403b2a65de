//! Person entity, input validation, and row operations.
//!
//! # Data Flow
//! ```text
//! request JSON
//!     → validate.rs (shape check → PersonInput | field errors)
//!     → repo.rs (single-row SQL inside a session)
//!     → model.rs (Person projection serialized back to the client)
//! ```

pub mod model;
pub mod repo;
pub mod validate;

pub use model::{Person, PersonInput};
pub use validate::{validate, FieldError};
