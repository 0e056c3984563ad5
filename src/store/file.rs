//! # Local Filesystem Store
//!
//! Layout:
//!
//! ```text
//! <root>/
//!   components/
//!     <id>.json
//! ```
//!
//! The name index is rebuilt from the documents when the store is opened.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::backend::ComponentStore;
use super::errors::{StoreError, StoreResult};
use crate::components::ComponentRecord;

const COMPONENTS_DIR: &str = "components";
const RECORD_EXTENSION: &str = "json";

/// One JSON document per component under a data directory
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    /// Name to id. Held for the whole of `create` so name checks and
    /// writes are serialized.
    names: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or initialize) a store rooted at `root`
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = root.as_ref().join(COMPONENTS_DIR);
        fs::create_dir_all(&dir)?;

        let mut names = HashMap::new();
        for record in read_all(&dir)? {
            names.insert(record.name, record.id);
        }

        Ok(Self {
            dir,
            names: Mutex::new(names),
        })
    }

    /// Directory holding the record documents
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &str) -> Option<PathBuf> {
        // ids are used as file names; anything else could escape the directory
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        Some(self.dir.join(format!("{}.{}", id, RECORD_EXTENSION)))
    }
}

impl ComponentStore for FileStore {
    fn create(&self, record: &ComponentRecord) -> StoreResult<()> {
        let mut names = self
            .names
            .lock()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        if names.contains_key(&record.name) {
            return Err(StoreError::Conflict(record.name.clone()));
        }

        let path = self
            .record_path(&record.id)
            .ok_or_else(|| StoreError::Internal(format!("invalid id: {}", record.id)))?;
        if path.exists() {
            return Err(StoreError::Internal(format!("duplicate id: {}", record.id)));
        }

        let data = serde_json::to_vec_pretty(record)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;

        names.insert(record.name.clone(), record.id.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<ComponentRecord> {
        let path = self
            .record_path(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let data = fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(id.to_string())
            } else {
                StoreError::Io(e.to_string())
            }
        })?;

        Ok(serde_json::from_slice(&data)?)
    }

    fn list(&self) -> StoreResult<Vec<ComponentRecord>> {
        read_all(&self.dir)
    }
}

fn read_all(dir: &Path) -> StoreResult<Vec<ComponentRecord>> {
    let mut records = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
            continue;
        }
        let data = fs::read(&path)?;
        let record: ComponentRecord = serde_json::from_slice(&data)
            .map_err(|e| StoreError::Codec(format!("{}: {}", path.display(), e)))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PropsSchema;
    use tempfile::TempDir;

    fn record(id: &str, name: &str) -> ComponentRecord {
        ComponentRecord {
            id: id.to_string(),
            name: name.to_string(),
            code: "interface Props { label: string; }".to_string(),
            props_schema: PropsSchema::from([("label".to_string(), "string".to_string())]),
        }
    }

    #[test]
    fn test_write_read() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();

        let rec = record("abc123", "Button");
        store.create(&rec).unwrap();
        assert_eq!(store.get("abc123").unwrap(), rec);
        assert!(store.dir().join("abc123.json").exists());
    }

    #[test]
    fn test_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();

        assert!(matches!(store.get("missing"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_path_like_ids_are_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();

        assert!(matches!(store.get("../secret"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.get(""), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_name() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();

        store.create(&record("a1", "Button")).unwrap();
        let err = store.create(&record("a2", "Button")).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_document_is_reported() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();
        fs::write(store.dir().join("bad.json"), b"{not json").unwrap();

        assert!(matches!(store.get("bad"), Err(StoreError::Codec(_))));
        assert!(matches!(store.list(), Err(StoreError::Codec(_))));
    }

    #[test]
    fn test_ignores_other_files() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();
        fs::write(store.dir().join("notes.txt"), b"hello").unwrap();

        assert!(store.list().unwrap().is_empty());
    }
}
