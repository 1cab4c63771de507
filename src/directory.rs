//! The contact directory.
//!
//! A [`Directory`] maps contact names to [`Record`]s, keeps them in insertion
//! order for listing, and is the only component that talks to the backing
//! [`ContactStore`]. Every mutation is followed by a full synchronous save.

use crate::domain::Name;
use crate::error::{DirectoryError, DirectoryResult, RecordResult, StoreError, StoreResult};
use crate::models::Record;
use crate::render;
use crate::repositories::{ContactStore, JsonFileStore};
use chrono::{Days, Local, NaiveDate};
use std::path::PathBuf;

/// All contacts, keyed by name.
///
/// The key of a record is always its current name: records are only handed
/// out by shared reference, and renames go through [`Directory::update_record`]
/// or [`Directory::rename_record`], which re-key the entry.
pub struct Directory {
    records: Vec<Record>,
    store: Box<dyn ContactStore>,
}

fn key_of(record: &Record) -> &str {
    record.name().map(Name::as_str).unwrap_or_default()
}

impl Directory {
    /// Create an empty directory backed by `store` without reading it.
    pub fn new(store: impl ContactStore + 'static) -> Self {
        Self {
            records: Vec::new(),
            store: Box::new(store),
        }
    }

    /// Read the directory from `store`.
    ///
    /// A store that has never been written yields an empty directory. A store
    /// whose content cannot be decoded, or that holds unnamed records,
    /// duplicate names or duplicate phones/emails, is reported as
    /// [`StoreError::Corrupt`].
    pub fn load(store: impl ContactStore + 'static) -> StoreResult<Self> {
        let location = store.location();

        let records = match store.load() {
            Ok(Some(records)) => records,
            Ok(None) => {
                tracing::info!(store = %location, "No saved contacts, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(store = %location, error = %e, "Failed to load contacts");
                return Err(e);
            }
        };

        if let Err(reason) = Self::check_records(&records) {
            tracing::warn!(store = %location, reason = %reason, "Contact store is corrupt");
            return Err(StoreError::Corrupt {
                path: PathBuf::from(location),
                reason,
            });
        }

        tracing::info!(store = %location, count = records.len(), "Contacts loaded");
        Ok(Self {
            records,
            store: Box::new(store),
        })
    }

    /// Read the directory from the JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::load(JsonFileStore::new(path))
    }

    fn check_records(records: &[Record]) -> Result<(), String> {
        for (index, record) in records.iter().enumerate() {
            let name = record
                .name()
                .ok_or_else(|| format!("record #{} has no name", index + 1))?;

            record
                .check_unique_values()
                .map_err(|e| format!("record {}: {}", name, e))?;

            if records[..index].iter().any(|r| key_of(r) == name.as_str()) {
                return Err(format!("name {} is stored twice", name));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in listing (insertion) order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(key_of)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index_of(name).map(|index| &self.records[index])
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| key_of(r) == name)
    }

    /// Index `record` under its name and save.
    ///
    /// A record with the same name is silently replaced and keeps its
    /// position in the listing.
    pub fn add_record(&mut self, record: Record) -> DirectoryResult<()> {
        let name = record
            .name()
            .ok_or(DirectoryError::EmptyInput("name"))?
            .to_string();

        match self.index_of(&name) {
            Some(index) => {
                tracing::info!(name = %name, "Replacing existing contact");
                self.records[index] = record;
            }
            None => {
                tracing::info!(name = %name, "Adding contact");
                self.records.push(record);
            }
        }

        self.save()?;
        Ok(())
    }

    /// Remove the record stored under `name` and save.
    pub fn remove_record(&mut self, name: &str) -> DirectoryResult<Record> {
        let index = self
            .index_of(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;

        let removed = self.records.remove(index);
        tracing::info!(name = %name, "Contact removed");

        self.save()?;
        Ok(removed)
    }

    /// Apply `update` to the record stored under `name` and save.
    ///
    /// The update runs on a copy and is committed only when it succeeds, so
    /// a failing step leaves the stored record unchanged. When the update
    /// renames the record it is re-keyed in place; renaming onto a name held
    /// by another record fails with [`DirectoryError::AlreadyExists`].
    pub fn update_record<F>(&mut self, name: &str, update: F) -> DirectoryResult<()>
    where
        F: FnOnce(&mut Record) -> RecordResult<()>,
    {
        let index = self
            .index_of(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;

        let mut updated = self.records[index].clone();
        update(&mut updated)?;

        let new_name = key_of(&updated);
        if new_name != name {
            if self.index_of(new_name).is_some() {
                return Err(DirectoryError::AlreadyExists(new_name.to_string()));
            }
            tracing::info!(old = %name, new = %new_name, "Contact renamed");
        }

        self.records[index] = updated;
        self.save()?;
        Ok(())
    }

    /// Rename the record stored under `old_name`, re-keying it.
    pub fn rename_record(&mut self, old_name: &str, new_name: &str) -> DirectoryResult<()> {
        self.update_record(old_name, |record| record.change_name(new_name))
    }

    /// Write the whole directory to the backing store.
    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.records)?;
        tracing::debug!(
            store = %self.store.location(),
            count = self.records.len(),
            "Contacts saved"
        );
        Ok(())
    }

    /// Records whose name contains `query` (case-sensitive), in listing order.
    pub fn find(&self, query: &str) -> DirectoryResult<Vec<&Record>> {
        if query.is_empty() {
            return Err(DirectoryError::EmptyInput("search query"));
        }

        let matches: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| key_of(r).contains(query))
            .collect();

        if matches.is_empty() {
            return Err(DirectoryError::NotFound(query.to_string()));
        }

        tracing::debug!(query, count = matches.len(), "Contacts found");
        Ok(matches)
    }

    /// Contacts whose birthday falls `offset_days` from today.
    ///
    /// Returns `(name, yyyy-mm-dd)` pairs in listing order.
    pub fn upcoming_birthdays(&self, offset_days: i64) -> Vec<(String, String)> {
        self.upcoming_birthdays_from(Local::now().date_naive(), offset_days)
    }

    /// Same as [`Directory::upcoming_birthdays`], counting from `today`.
    ///
    /// Only month and day are compared, so a February 29 birthday only
    /// matches in leap years.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, offset_days: i64) -> Vec<(String, String)> {
        let target = if offset_days >= 0 {
            today.checked_add_days(Days::new(offset_days.unsigned_abs()))
        } else {
            today.checked_sub_days(Days::new(offset_days.unsigned_abs()))
        };

        let Some(target) = target else {
            tracing::warn!(offset_days, "Birthday offset is out of the calendar range");
            return Vec::new();
        };

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                birthday
                    .is_anniversary(target)
                    .then(|| (key_of(record).to_string(), birthday.to_string()))
            })
            .collect()
    }

    /// Tabular listing of every contact.
    pub fn render(&self) -> String {
        render::render_table(&self.records)
    }
}
