//! File-based storage backend.

use crate::config::StorageConfig;
use crate::core::Customer;
use crate::error::{Error, Result};
use crate::storage::traits::SnapshotStore;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// On-disk document, borrowed for writing.
#[derive(Serialize)]
struct DocumentRef<'a> {
    customers: &'a [Customer],
}

/// On-disk document, owned for reading.
#[derive(Deserialize)]
struct Document {
    customers: Vec<Customer>,
}

/// JSON file backend with atomic writes.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a new file backend for the given data file.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Create a backend for the data file named by the storage config.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        Self::new(config.data_file())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for FileBackend {
    fn load_snapshot(&self) -> Result<Option<Vec<Customer>>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A bare `null` document is an empty store written by older versions
        let document: Option<Document> = serde_json::from_slice(&contents)
            .map_err(|e| Error::CorruptData(format!("{}: {e}", self.path.display())))?;
        let customers = document.map(|d| d.customers).unwrap_or_default();

        debug!(
            "read {} customer(s) from {}",
            customers.len(),
            self.path.display()
        );
        Ok(Some(customers))
    }

    fn save_snapshot(&self, customers: &[Customer]) -> Result<()> {
        let temp = self.temp_path();

        let mut contents = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut contents, formatter);
        DocumentRef { customers }.serialize(&mut serializer)?;

        // Write to temp file first, then atomic rename - a crash mid-write
        // leaves the previous backup intact
        let written = write_synced(&temp, &contents).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!(
            "wrote {} customer(s) to {}",
            customers.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
