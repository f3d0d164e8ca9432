//! `insurapro add` command implementation.

use crate::cli::persist;
use crate::core::CustomerStore;
use crate::error::Result;
use crate::storage::SnapshotStore;
use std::io::Write;

/// Run the add command.
///
/// Creates a customer with an empty history and saves.
///
/// # Errors
///
/// Returns an error if the backup cannot be written.
pub fn run<B: SnapshotStore>(
    store: &mut CustomerStore<B>,
    name: &str,
    surname: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = store.add_customer(name.trim(), surname.trim())?;
    persist(store)?;

    writeln!(out, "Customer added with ID {id}.")?;
    Ok(())
}
