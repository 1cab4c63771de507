use contact_book::error::{StoreError, StoreResult};
use contact_book::{ContactStore, Record};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps the saved records in memory and tracks method calls for
/// verification. Clones share state, so a test can keep one handle while the
/// directory owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    saved: Arc<Mutex<Option<Vec<Record>>>>,
    corrupt: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a store that has never been written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(records);
        store
    }

    /// Make every subsequent load fail as corrupt with `reason`.
    pub fn set_corrupt(&self, reason: &str) {
        *self.corrupt.lock().unwrap() = Some(reason.to_string());
    }

    /// Records from the last save, if any.
    pub fn saved(&self) -> Option<Vec<Record>> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> StoreResult<Option<Vec<Record>>> {
        self.track_call("load");

        if let Some(reason) = self.corrupt.lock().unwrap().clone() {
            return Err(StoreError::Corrupt {
                path: PathBuf::from(self.location()),
                reason,
            });
        }

        Ok(self.saved())
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        self.track_call("save");
        *self.saved.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://contacts".to_string()
    }
}
