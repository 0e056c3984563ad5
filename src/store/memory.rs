//! # In-Memory Store

use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::ComponentStore;
use super::errors::{StoreError, StoreResult};
use crate::components::ComponentRecord;

/// Records held in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Records by ID, name index kept under the same lock
    inner: RwLock<Indexes>,
}

#[derive(Debug, Default)]
struct Indexes {
    by_id: HashMap<String, ComponentRecord>,
    by_name: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComponentStore for MemoryStore {
    fn create(&self, record: &ComponentRecord) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        if inner.by_name.contains_key(&record.name) {
            return Err(StoreError::Conflict(record.name.clone()));
        }
        if inner.by_id.contains_key(&record.id) {
            return Err(StoreError::Internal(format!("duplicate id: {}", record.id)));
        }

        inner.by_name.insert(record.name.clone(), record.id.clone());
        inner.by_id.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<ComponentRecord> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        inner
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self) -> StoreResult<Vec<ComponentRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        Ok(inner.by_id.values().cloned().collect())
    }
}
