//! # Component Store Trait

use super::errors::StoreResult;
use crate::components::ComponentRecord;

/// Durable home for accepted components
pub trait ComponentStore: Send + Sync + std::fmt::Debug {
    /// Persist a new record. Fails with `Conflict` if the name is taken.
    fn create(&self, record: &ComponentRecord) -> StoreResult<()>;

    /// Fetch a record by id
    fn get(&self, id: &str) -> StoreResult<ComponentRecord>;

    /// List all records
    fn list(&self) -> StoreResult<Vec<ComponentRecord>>;
}
