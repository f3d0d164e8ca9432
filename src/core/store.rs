//! The customer record store.
//!
//! [`CustomerStore`] owns the in-memory customer collection and the id
//! counter, and is the only component that talks to the storage backend.
//! Customers keep insertion order; edits never reorder them and deletes
//! preserve the relative order of the rest.

use crate::core::customer::{Customer, CustomerId};
use crate::core::interaction::Interaction;
use crate::error::{Error, Result};
use crate::storage::SnapshotStore;
use log::{info, warn};
use std::collections::HashSet;

/// Largest id the store issues or accepts from a backup. Keeps ids
/// representable as a signed 64-bit JSON integer.
const MAX_ID: u64 = i64::MAX.unsigned_abs();

/// Where the in-memory collection stands relative to the backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Freshly constructed, nothing loaded or changed.
    Empty,

    /// Matches the backup that was just loaded.
    Loaded,

    /// Changed since the last load or save.
    Modified,

    /// Matches the backup that was just written.
    Persisted,
}

/// Result of a successful [`CustomerStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The backup was read and replaced the in-memory collection.
    Loaded {
        /// Number of customers read.
        customers: usize,
    },

    /// No backup exists yet. The in-memory collection is left as it was.
    NoBackup,
}

/// Owns every customer record and persists them through a [`SnapshotStore`].
#[derive(Debug)]
pub struct CustomerStore<B> {
    backend: B,
    customers: Vec<Customer>,
    last_id: u64,
    state: StoreState,
}

impl<B: SnapshotStore> CustomerStore<B> {
    /// Create an empty store backed by `backend`. Nothing is loaded.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            customers: Vec::new(),
            last_id: 0,
            state: StoreState::Empty,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Whether there are changes that have not been saved.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state == StoreState::Modified
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Add a customer with an empty history and return its new id.
    ///
    /// Ids come from a counter that only grows, so an id is never handed out
    /// twice, even after the customer holding it is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdsExhausted`] once the counter has reached the
    /// largest id a backup can hold. The store is unchanged in that case.
    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Result<CustomerId> {
        let id = loop {
            let candidate = self.next_id()?;
            if self.customers.iter().all(|c| c.id() != candidate) {
                break candidate;
            }
            warn!("skipping id {candidate}: already held by a customer");
        };

        self.customers.push(Customer::new(id, name, surname));
        self.state = StoreState::Modified;
        Ok(id)
    }

    fn next_id(&mut self) -> Result<CustomerId> {
        if self.last_id >= MAX_ID {
            return Err(Error::IdsExhausted(MAX_ID));
        }
        self.last_id += 1;
        Ok(CustomerId::new(self.last_id))
    }

    /// Replace the name and surname of a customer.
    ///
    /// Returns `false` if no customer has that id.
    pub fn edit_customer(
        &mut self,
        id: CustomerId,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> bool {
        let Some(customer) = self.customers.iter_mut().find(|c| c.id() == id) else {
            return false;
        };
        customer.rename(name, surname);
        self.state = StoreState::Modified;
        true
    }

    /// Remove the customer with this id.
    ///
    /// Returns `false` if no customer has that id.
    pub fn delete_customer(&mut self, id: CustomerId) -> bool {
        let before = self.customers.len();
        self.customers.retain(|c| c.id() != id);
        let removed = self.customers.len() != before;
        if removed {
            self.state = StoreState::Modified;
        }
        removed
    }

    /// Append an interaction to a customer's history.
    ///
    /// Returns `false` if no customer has that id.
    pub fn add_interaction(&mut self, id: CustomerId, interaction: Interaction) -> bool {
        let Some(customer) = self.customers.iter_mut().find(|c| c.id() == id) else {
            return false;
        };
        customer.push_interaction(interaction);
        self.state = StoreState::Modified;
        true
    }

    /// Every customer, in store order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    #[must_use]
    pub fn get_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// Customers whose name, surname, or decimal id equals `query` exactly.
    ///
    /// Results follow store order. Names are not unique, so several
    /// customers may match; telling them apart is up to the caller.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.matches(query)).collect()
    }

    /// Write the whole collection to the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot write the backup. The store
    /// stays dirty in that case.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save_snapshot(&self.customers)?;
        self.state = StoreState::Persisted;
        info!(
            "saved {} customer(s) to {}",
            self.customers.len(),
            self.backend.location()
        );
        Ok(())
    }

    /// Replace the in-memory collection with the backend's copy.
    ///
    /// The id counter is moved past the largest loaded id so new customers
    /// never collide with loaded ones. A missing backup is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup cannot be read, is malformed, or holds
    /// duplicate or out-of-range ids. The in-memory collection is unchanged
    /// on error.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let Some(customers) = self.backend.load_snapshot()? else {
            info!("no backup found at {}, starting empty", self.backend.location());
            return Ok(LoadOutcome::NoBackup);
        };

        let max_id = validate_ids(&customers)?;
        self.last_id = self.last_id.max(max_id);
        self.customers = customers;
        self.state = StoreState::Loaded;

        info!(
            "loaded {} customer(s) from {}",
            self.customers.len(),
            self.backend.location()
        );
        Ok(LoadOutcome::Loaded {
            customers: self.customers.len(),
        })
    }
}

/// Check loaded ids are unique and in range, returning the largest.
fn validate_ids(customers: &[Customer]) -> Result<u64> {
    let mut seen = HashSet::with_capacity(customers.len());
    let mut max_id = 0;

    for customer in customers {
        let id = customer.id();
        if id.get() > MAX_ID {
            return Err(Error::CorruptData(format!("customer id {id} is out of range")));
        }
        if !seen.insert(id) {
            return Err(Error::CorruptData(format!("duplicate customer id {id}")));
        }
        max_id = max_id.max(id.get());
    }

    Ok(max_id)
}
