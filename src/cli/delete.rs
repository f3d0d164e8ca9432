//! `insurapro delete` command implementation.

use crate::cli::{persist, resolve_customer};
use crate::core::CustomerStore;
use crate::error::{Error, Result};
use crate::storage::SnapshotStore;
use std::io::Write;

/// Run the delete command.
///
/// Removes the customer picked by query, then saves.
///
/// # Errors
///
/// Returns an error if the query does not resolve to exactly one customer
/// or the backup cannot be written.
pub fn run<B: SnapshotStore>(
    store: &mut CustomerStore<B>,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = resolve_customer(store, query)?;
    if !store.delete_customer(id) {
        return Err(Error::CustomerNotFound(id.to_string()));
    }
    persist(store)?;

    writeln!(out, "Customer {id} deleted.")?;
    Ok(())
}
