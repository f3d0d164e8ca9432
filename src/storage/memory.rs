//! In-memory storage backend.

use crate::core::Customer;
use crate::error::{Error, Result};
use crate::storage::traits::SnapshotStore;
use std::io;
use std::sync::RwLock;

/// In-memory storage backend for testing and embedding.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    snapshot: RwLock<Option<Vec<Customer>>>,
}

impl MemoryBackend {
    /// Create a new, empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> Error {
    Error::Storage(io::Error::other("memory backend lock poisoned"))
}

impl SnapshotStore for MemoryBackend {
    fn load_snapshot(&self) -> Result<Option<Vec<Customer>>> {
        let snapshot = self.snapshot.read().map_err(|_| poisoned())?;
        Ok(snapshot.clone())
    }

    fn save_snapshot(&self, customers: &[Customer]) -> Result<()> {
        let mut snapshot = self.snapshot.write().map_err(|_| poisoned())?;
        *snapshot = Some(customers.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
