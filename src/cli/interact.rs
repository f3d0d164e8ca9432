//! `insurapro interact` command implementation.

use crate::cli::{persist, resolve_customer};
use crate::core::{CustomerStore, Interaction};
use crate::error::{Error, Result};
use crate::storage::SnapshotStore;
use std::io::Write;

/// Run the interact command.
///
/// Appends an interaction to the customer picked by query, then saves.
///
/// # Errors
///
/// Returns an error if the query does not resolve to exactly one customer
/// or the backup cannot be written.
pub fn run<B: SnapshotStore>(
    store: &mut CustomerStore<B>,
    query: &str,
    kind: &str,
    details: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = resolve_customer(store, query)?;
    if !store.add_interaction(id, Interaction::new(kind.trim(), details)) {
        return Err(Error::CustomerNotFound(id.to_string()));
    }
    persist(store)?;

    writeln!(out, "Interaction added to customer {id}.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn interact_appends_and_saves() {
        let backend = MemoryBackend::new();
        let mut store = CustomerStore::new(&backend);
        store.add_customer("Ana", "Lee").unwrap();

        let mut out = Vec::new();
        run(&mut store, "Ana", "Appointment", "Intro meeting", &mut out).unwrap();
        run(&mut store, "1", "Contract", "Car policy", &mut out).unwrap();

        let saved = backend.load_snapshot().unwrap().unwrap();
        let history = saved[0].interactions();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], Interaction::new("Appointment", "Intro meeting"));
        assert_eq!(history[1], Interaction::new("Contract", "Car policy"));
    }

    #[test]
    fn interact_unknown_customer_does_not_save() {
        let backend = MemoryBackend::new();
        let mut store = CustomerStore::new(&backend);

        let mut out = Vec::new();
        let result = run(&mut store, "Ghost", "Call", "x", &mut out);

        assert!(matches!(result, Err(Error::CustomerNotFound(_))));
        assert!(backend.load_snapshot().unwrap().is_none());
    }
}
