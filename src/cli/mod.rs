//! CLI command implementations.
//!
//! Every command runs against a store that has already been loaded; the
//! ones that change it save before returning.

pub mod add;
pub mod delete;
pub mod edit;
pub mod interact;
pub mod list;
pub mod search;
pub mod show;

use crate::config::Config;
use crate::core::{Customer, CustomerId, CustomerStore, LoadOutcome};
use crate::error::{Error, Result};
use crate::storage::{FileBackend, SnapshotStore};
use log::{debug, error};
use std::io::Write;
use std::path::PathBuf;

/// Open the file-backed store and load the last backup.
///
/// `file` overrides the configured data file. A missing backup starts an
/// empty store.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be created or the
/// backup exists but cannot be read.
pub fn open_store(config: &Config, file: Option<PathBuf>) -> Result<CustomerStore<FileBackend>> {
    let backend = match file {
        Some(path) => FileBackend::new(path)?,
        None => FileBackend::from_config(&config.storage)?,
    };

    let mut store = CustomerStore::new(backend);
    if store.load()? == LoadOutcome::NoBackup {
        debug!("empty CRM initialized");
    }
    Ok(store)
}

/// Save after a change, logging that the change is lost if the write fails.
///
/// # Errors
///
/// Returns an error if the backend cannot write the backup.
pub fn persist<B: SnapshotStore>(store: &mut CustomerStore<B>) -> Result<()> {
    store.save().inspect_err(|e| {
        error!(
            "could not write backup to {}, changes from this run are lost: {e}",
            store.backend().location()
        );
    })
}

/// Resolve a user query to exactly one customer id.
///
/// `#<id>` looks the id up directly. Anything else goes through
/// [`CustomerStore::search`] and must match a single customer.
///
/// # Errors
///
/// Returns [`Error::CustomerNotFound`] when nothing matches and
/// [`Error::AmbiguousQuery`] when several customers do.
pub fn resolve_customer<B: SnapshotStore>(
    store: &CustomerStore<B>,
    query: &str,
) -> Result<CustomerId> {
    let query = query.trim();

    if let Some(raw) = query.strip_prefix('#') {
        return raw
            .parse::<CustomerId>()
            .ok()
            .and_then(|id| store.get_by_id(id))
            .map(Customer::id)
            .ok_or_else(|| Error::CustomerNotFound(query.to_string()));
    }

    match store.search(query).as_slice() {
        [] => Err(Error::CustomerNotFound(query.to_string())),
        [only] => Ok(only.id()),
        many => Err(Error::AmbiguousQuery {
            query: query.to_string(),
            matches: many.iter().map(|c| c.id().to_string()).collect(),
        }),
    }
}

/// Write the one-line summary of a customer.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_summary(out: &mut impl Write, customer: &Customer) -> Result<()> {
    writeln!(
        out,
        "ID: {}, Name: {}, Surname: {}",
        customer.id(),
        customer.name(),
        customer.surname()
    )?;
    Ok(())
}

/// Write a customer with its full interaction history.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_details(out: &mut impl Write, customer: &Customer) -> Result<()> {
    write_summary(out, customer)?;
    writeln!(out, "-- Interactions --")?;
    for interaction in customer.interactions() {
        writeln!(
            out,
            "Type: {}, Details: {}",
            interaction.kind(),
            interaction.details()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Interaction;
    use crate::storage::MemoryBackend;

    fn two_anas() -> CustomerStore<MemoryBackend> {
        let mut store = CustomerStore::new(MemoryBackend::new());
        store.add_customer("Ana", "Lee").unwrap();
        store.add_customer("Ana", "Kim").unwrap();
        store.add_customer("Bo", "Tan").unwrap();
        store
    }

    #[test]
    fn resolve_single_match() {
        let store = two_anas();
        assert_eq!(resolve_customer(&store, "Tan").unwrap(), CustomerId::new(3));
        assert_eq!(resolve_customer(&store, " Kim ").unwrap(), CustomerId::new(2));
    }

    #[test]
    fn resolve_by_id_text() {
        let store = two_anas();
        assert_eq!(resolve_customer(&store, "1").unwrap(), CustomerId::new(1));
    }

    #[test]
    fn resolve_no_match_is_not_found() {
        let store = two_anas();
        assert!(matches!(
            resolve_customer(&store, "Zed"),
            Err(Error::CustomerNotFound(q)) if q == "Zed"
        ));
    }

    #[test]
    fn resolve_several_matches_is_ambiguous() {
        let store = two_anas();
        match resolve_customer(&store, "Ana") {
            Err(Error::AmbiguousQuery { matches, .. }) => assert_eq!(matches, vec!["1", "2"]),
            other => panic!("expected ambiguous query, got {other:?}"),
        }
    }

    #[test]
    fn resolve_hash_id_bypasses_name_matches() {
        let mut store = two_anas();
        store.add_customer("2", "Numeric").unwrap();

        assert!(matches!(
            resolve_customer(&store, "2"),
            Err(Error::AmbiguousQuery { .. })
        ));
        assert_eq!(resolve_customer(&store, "#2").unwrap(), CustomerId::new(2));
        assert!(matches!(
            resolve_customer(&store, "#99"),
            Err(Error::CustomerNotFound(_))
        ));
        assert!(matches!(
            resolve_customer(&store, "#abc"),
            Err(Error::CustomerNotFound(_))
        ));
    }

    #[test]
    fn details_list_interactions_in_order() {
        let mut store = CustomerStore::new(MemoryBackend::new());
        let id = store.add_customer("Ana", "Lee").unwrap();
        store.add_interaction(id, Interaction::new("Appointment", "Intro"));
        store.add_interaction(id, Interaction::new("Contract", "Car"));

        let mut out = Vec::new();
        write_details(&mut out, store.get_by_id(id).unwrap()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ID: 1, Name: Ana, Surname: Lee\n\
             -- Interactions --\n\
             Type: Appointment, Details: Intro\n\
             Type: Contract, Details: Car\n\n"
        );
    }

    #[test]
    fn persist_marks_store_saved() {
        let mut store = two_anas();
        persist(&mut store).unwrap();
        assert!(!store.is_dirty());
        assert_eq!(store.backend().load_snapshot().unwrap().unwrap().len(), 3);
    }
}
