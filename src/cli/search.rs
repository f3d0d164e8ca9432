//! `insurapro search` command implementation.

use crate::cli::write_summary;
use crate::core::CustomerStore;
use crate::error::Result;
use crate::storage::SnapshotStore;
use std::io::Write;

/// Run the search command.
///
/// Lists every customer whose name, surname or id equals the query.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn run<B: SnapshotStore>(
    store: &CustomerStore<B>,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    let matches = store.search(query.trim());

    if matches.is_empty() {
        writeln!(out, "No matching customers.")?;
        return Ok(());
    }

    writeln!(out, "Found the following customers:")?;
    for customer in matches {
        write_summary(out, customer)?;
    }
    Ok(())
}
