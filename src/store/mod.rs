//! # Component Persistence
//!
//! Storage collaborators for accepted [`ComponentRecord`]s.
//!
//! - [`MemoryStore`] keeps records in process memory
//! - [`FileStore`] keeps one JSON document per record under a data directory
//!
//! Both enforce name uniqueness and report a duplicate as
//! [`StoreError::Conflict`].
//!
//! [`ComponentRecord`]: crate::components::ComponentRecord

pub mod backend;
pub mod errors;
pub mod file;
pub mod memory;

pub use backend::ComponentStore;
pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
