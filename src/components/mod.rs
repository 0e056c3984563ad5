//! # Component Acceptance
//!
//! Turns a submitted `(name, code)` pair into a persistable
//! [`ComponentRecord`], or a rejection.
//!
//! The pipeline runs in three steps:
//! 1. [`validate`] enforces the size bound and the import ban (fail-fast)
//! 2. an [`IdGenerator`] produces the opaque record id
//! 3. [`extract`] derives the props schema from `interface Props { ... }`
//!
//! Every step is a pure function of its input apart from the entropy source
//! behind the id generator, so the pipeline can be shared freely across
//! request handlers.

pub mod errors;
pub mod id;
pub mod pipeline;
pub mod record;
pub mod schema;
pub mod validator;

pub use errors::{AcceptError, AcceptResult, GenerationFailure, ValidationError, ValidationResult};
pub use id::{IdGenerator, OsRngIdGenerator, ID_BYTES};
pub use pipeline::accept;
pub use record::{ComponentRecord, PropsSchema};
pub use schema::extract;
pub use validator::{validate, MAX_CODE_SIZE};
