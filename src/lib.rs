//! Contact Book - a personal contact manager with validated records.
//!
//! Contacts are stored as [`Record`]s in a [`Directory`] keyed by name and
//! persisted to a single local file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, address, phone, email, birthday)
//! - **models**: The contact record and its mutation rules
//! - **directory**: The name-keyed collection with search and birthday queries
//! - **repositories**: Backing store abstraction and the JSON file store
//! - **render**: Console table listing
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod render;
pub mod repositories;

pub use config::Config;
pub use directory::Directory;
pub use domain::{Address, Birthday, Email, Name, Phone, ValidationError};
pub use error::{ConfigError, DirectoryError, RecordError, StoreError};
pub use models::Record;
pub use repositories::{ContactStore, JsonFileStore};
