//! Persistence of the raw input text, one slot per schema.
//!
//! Records are never stored; they are re-derived from this text on every
//! change.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::models::record::Schema;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Load-at-start, save-on-change storage for the raw text.
pub trait TextStore {
    /// Stored text for the schema, if any.
    fn load(&self, schema: Schema) -> Result<Option<String>>;

    /// Replace the stored text for the schema.
    fn save(&mut self, schema: Schema, text: &str) -> Result<()>;

    /// Forget the stored text for the schema.
    fn clear(&mut self, schema: Schema) -> Result<()>;
}

/// Storage key for a schema.
pub fn storage_key(schema: Schema) -> String {
    format!("listing-{}", schema)
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    texts: HashMap<Schema, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextStore for MemoryStore {
    fn load(&self, schema: Schema) -> Result<Option<String>> {
        Ok(self.texts.get(&schema).cloned())
    }

    fn save(&mut self, schema: Schema, text: &str) -> Result<()> {
        self.texts.insert(schema, text.to_string());
        Ok(())
    }

    fn clear(&mut self, schema: Schema) -> Result<()> {
        self.texts.remove(&schema);
        Ok(())
    }
}

/// One text file per schema under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the given directory, or fail when none could be resolved.
    pub fn from_dir(dir: Option<PathBuf>) -> Result<Self> {
        dir.map(Self::new).ok_or(StoreError::NoDataDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing the schema's slot.
    pub fn path(&self, schema: Schema) -> PathBuf {
        self.dir.join(format!("{}.txt", storage_key(schema)))
    }
}

impl TextStore for FileStore {
    fn load(&self, schema: Schema) -> Result<Option<String>> {
        let path = self.path(schema);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!("Loaded {} bytes from {}", text.len(), path.display());
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: storage_key(schema),
                source,
            }),
        }
    }

    fn save(&mut self, schema: Schema, text: &str) -> Result<()> {
        let path = self.path(schema);
        fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&path, text))
            .map_err(|source| StoreError::Write {
                key: storage_key(schema),
                source,
            })?;
        debug!("Saved {} bytes to {}", text.len(), path.display());
        Ok(())
    }

    fn clear(&mut self, schema: Schema) -> Result<()> {
        match fs::remove_file(self.path(schema)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write {
                key: storage_key(schema),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_slots_are_per_schema() {
        let mut store = MemoryStore::new();
        store.save(Schema::Base, "Anh Nam 0901234567").unwrap();

        assert_eq!(
            store.load(Schema::Base).unwrap().as_deref(),
            Some("Anh Nam 0901234567")
        );
        assert_eq!(store.load(Schema::Extended).unwrap(), None);

        store.clear(Schema::Base).unwrap();
        assert_eq!(store.load(Schema::Base).unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.load(Schema::Extended).unwrap(), None);

        store.save(Schema::Extended, "dòng một\ndòng hai").unwrap();
        assert_eq!(
            store.load(Schema::Extended).unwrap().as_deref(),
            Some("dòng một\ndòng hai")
        );
        assert!(store.path(Schema::Extended).ends_with("listing-extended.txt"));
        assert_eq!(store.load(Schema::Base).unwrap(), None);

        store.clear(Schema::Extended).unwrap();
        store.clear(Schema::Extended).unwrap();
        assert_eq!(store.load(Schema::Extended).unwrap(), None);
    }

    #[test]
    fn test_from_dir_requires_directory() {
        assert!(matches!(FileStore::from_dir(None), Err(StoreError::NoDataDir)));
    }
}
