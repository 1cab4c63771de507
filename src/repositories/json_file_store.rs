//! File-backed contact store.
//!
//! The whole directory lives in one JSON document. Every save rewrites the
//! document completely: the new content goes to a sibling `.tmp` file which
//! is synced and then renamed over the target, so an interrupted save leaves
//! the previous document in place.

use super::traits::ContactStore;
use crate::error::{StoreError, StoreResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// On-disk layout, borrowed for writing.
#[derive(Serialize)]
struct StoredBookRef<'a> {
    records: &'a [Record],
}

/// On-disk layout, owned for reading.
#[derive(Deserialize)]
struct StoredBook {
    records: Vec<Record>,
}

/// Stores a directory as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Record>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No contact store yet");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: StoredBook =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Some(book.records))
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&StoredBookRef { records })?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.temp_path();
        if let Err(e) = replace_with(&tmp_path, &self.path, &bytes) {
            // Best effort, the write error is what gets reported
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(e));
        }

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            bytes = bytes.len(),
            "Contact store written"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write `bytes` to `tmp_path`, sync it and rename it over `target`.
fn replace_with(tmp_path: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record(name: &str) -> Record {
        let mut record = Record::with_name(name).unwrap();
        record.add_phone("+380 50 000-00-00").unwrap();
        record
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        let records = vec![sample_record("Boris"), sample_record("Tom")];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), Some(records));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_title_cased_names_load_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        let records = vec![sample_record("ßen"), sample_record("ﬁona")];

        store.save(&records).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, records);
        assert_eq!(loaded[0].name().unwrap().as_str(), "Ssen");
        assert_eq!(loaded[1].name().unwrap().as_str(), "Fiona");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));

        store
            .save(&[sample_record("Boris"), sample_record("Tom")])
            .unwrap();
        store.save(&[sample_record("Alice")]).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, vec![sample_record("Alice")]);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("deeper").join("book.json"));

        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        // A directory in the target's place makes the final rename fail
        fs::create_dir(&path).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.save(&[sample_record("Boris")]),
            Err(StoreError::Io { .. })
        ));
        assert!(!store.temp_path().exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_load_garbage_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, b"\x00\x01 not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_load_invalid_field_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"{"records":[{"name":"Tom","phones":["12"]}]}"#).unwrap();

        let store = JsonFileStore::new(&path);
        match store.load() {
            Err(StoreError::Corrupt { reason, .. }) => assert!(reason.contains("phone")),
            other => panic!("Expected Corrupt error, got: {:?}", other),
        }
    }

    #[test]
    fn test_location_is_path() {
        let store = JsonFileStore::new("/tmp/contacts/book.json");
        assert_eq!(store.location(), "/tmp/contacts/book.json");
        assert_eq!(store.path(), Path::new("/tmp/contacts/book.json"));
    }
}
