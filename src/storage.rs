//! # Storage
//!
//! Flat-file database.
//!
//! Core purpose is to load and persist the full dish catalog. The file is
//! a single JSON object `{"dishes": [...]}`, pretty-printed, rewritten in
//! full on every save.
//!
//! ## Implementation
//!
//! - No caching: every load re-reads the file, every save rewrites it
//! - No locking: concurrent load-mutate-save sequences can race and the
//!   last save wins (lost update)
//! - `Storage` is a port: `FileStorage` is the real implementation,
//!   `MemoryStorage` substitutes for it in tests
use std::{fs, path::PathBuf, sync::Mutex};

use thiserror::Error;

use crate::catalog::Catalog;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read or write catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait Storage: Send + Sync {
    fn load(&self) -> Result<Catalog, StorageError>;

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;
}

pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Catalog, StorageError> {
        let data = fs::read_to_string(&self.path)?;

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(catalog)?;

        Ok(fs::write(&self.path, data)?)
    }
}

/// In-memory stand-in for [`FileStorage`], keeping the same
/// whole-catalog load/save contract.
#[derive(Default)]
pub struct MemoryStorage {
    catalog: Mutex<Catalog>,
}

impl MemoryStorage {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Catalog, StorageError> {
        Ok(self.catalog.lock().unwrap().clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        *self.catalog.lock().unwrap() = catalog.clone();

        Ok(())
    }
}
