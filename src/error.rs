//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every `Display` message is meant to be shown to the user as-is.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`Record`](crate::Record) mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required value was blank
    #[error("No {0} was given")]
    EmptyInput(&'static str),

    /// The value failed its field's format contract
    #[error(transparent)]
    InvalidFormat(#[from] ValidationError),

    /// The value (or a birthday) is already present
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// The referenced value is not present
    #[error("There is no such {0}")]
    NotFound(String),
}

/// Errors returned by [`Directory`](crate::Directory) operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A required value was blank
    #[error("No {0} was given")]
    EmptyInput(&'static str),

    /// No contact matches the given name or query
    #[error("There is no such contact: {0}")]
    NotFound(String),

    /// Another contact already uses the name
    #[error("Contact {0} already exists")]
    AlreadyExists(String),

    /// A record mutation applied through the directory failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The change was applied in memory but could not be saved
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur while reading or writing the backing store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but its content cannot be decoded into a directory
    #[error("Contact store {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The directory could not be encoded
    #[error("Failed to encode contact store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
