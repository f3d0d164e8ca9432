//! `insurapro show` command implementation.

use crate::cli::{resolve_customer, write_details};
use crate::core::CustomerStore;
use crate::error::{Error, Result};
use crate::storage::SnapshotStore;
use std::io::Write;

/// Run the show command.
///
/// Shows one customer, with interactions, picked by query.
///
/// # Errors
///
/// Returns an error if the query does not resolve to exactly one customer.
pub fn run<B: SnapshotStore>(
    store: &CustomerStore<B>,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = resolve_customer(store, query)?;
    let customer = store
        .get_by_id(id)
        .ok_or_else(|| Error::CustomerNotFound(id.to_string()))?;

    write_details(out, customer)
}
