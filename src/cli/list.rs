//! `insurapro list` command implementation.

use crate::cli::write_details;
use crate::core::CustomerStore;
use crate::error::Result;
use crate::storage::SnapshotStore;
use std::io::Write;

/// Run the list command.
///
/// Shows every customer with their interactions, in store order.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn run<B: SnapshotStore>(store: &CustomerStore<B>, out: &mut impl Write) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No customers found.")?;
        writeln!(out, "\nCustomers are stored in: {}", store.backend().location())?;
        return Ok(());
    }

    for customer in store.customers() {
        write_details(out, customer)?;
    }
    writeln!(out, "Showing {} customer(s)", store.len())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Interaction;
    use crate::storage::MemoryBackend;

    #[test]
    fn list_empty_store() {
        let store = CustomerStore::new(MemoryBackend::new());
        let mut out = Vec::new();
        run(&store, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("No customers found."));
        assert!(text.contains("memory"));
    }

    #[test]
    fn list_shows_customers_in_store_order() {
        let mut store = CustomerStore::new(MemoryBackend::new());
        store.add_customer("Bo", "Tan").unwrap();
        let ana = store.add_customer("Ana", "Lee").unwrap();
        store.add_interaction(ana, Interaction::new("Contract", "Home"));

        let mut out = Vec::new();
        run(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let bo = text.find("Name: Bo").unwrap();
        let ana = text.find("Name: Ana").unwrap();
        assert!(bo < ana);
        assert!(text.contains("Type: Contract, Details: Home"));
        assert!(text.ends_with("Showing 2 customer(s)\n"));
    }
}
