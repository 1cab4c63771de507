use crate::error::StoreResult;
use crate::models::Record;

/// Backing store for a [`Directory`](crate::Directory).
///
/// Provides abstraction over where the directory is persisted, enabling
/// different implementations (file on disk, in-memory for tests).
pub trait ContactStore {
    /// Read every stored record in listing order.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> StoreResult<Option<Vec<Record>>>;

    /// Replace the stored content with `records`.
    fn save(&self, records: &[Record]) -> StoreResult<()>;

    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;
}
