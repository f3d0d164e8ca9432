//! `insurapro edit` command implementation.

use crate::cli::{persist, resolve_customer};
use crate::core::CustomerStore;
use crate::error::{Error, Result};
use crate::storage::SnapshotStore;
use std::io::Write;

/// Run the edit command.
///
/// Replaces the name and surname of the customer picked by query, then saves.
///
/// # Errors
///
/// Returns an error if the query does not resolve to exactly one customer
/// or the backup cannot be written.
pub fn run<B: SnapshotStore>(
    store: &mut CustomerStore<B>,
    query: &str,
    name: &str,
    surname: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = resolve_customer(store, query)?;
    if !store.edit_customer(id, name.trim(), surname.trim()) {
        return Err(Error::CustomerNotFound(id.to_string()));
    }
    persist(store)?;

    writeln!(out, "Customer {id} updated.")?;
    Ok(())
}
