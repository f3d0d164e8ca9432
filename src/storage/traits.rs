//! Storage trait definitions.

use crate::core::Customer;
use crate::error::Result;

/// Backend holding the persisted copy of the customer collection.
///
/// The whole collection is written and read at once; there is no
/// per-record access.
pub trait SnapshotStore: Send + Sync {
    /// Read the last saved collection.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup cannot be read or does not hold a
    /// valid collection.
    fn load_snapshot(&self) -> Result<Option<Vec<Customer>>>;

    /// Replace the saved collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn save_snapshot(&self, customers: &[Customer]) -> Result<()>;

    /// Human-readable location of the backup, for status messages.
    fn location(&self) -> String;
}

/// Lets a store borrow a backend it does not own.
impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load_snapshot(&self) -> Result<Option<Vec<Customer>>> {
        (**self).load_snapshot()
    }

    fn save_snapshot(&self, customers: &[Customer]) -> Result<()> {
        (**self).save_snapshot(customers)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
