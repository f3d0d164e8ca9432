//! insurapro - customer records and interaction history for a single operator.
//!
//! The [`CustomerStore`](crate::core::CustomerStore) owns every customer and persists the whole
//! collection through a [`SnapshotStore`](crate::storage::SnapshotStore), by default a JSON file.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
