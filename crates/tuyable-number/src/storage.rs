//! Persistence of virtual number values.
//!
//! Each virtual number owns one record, keyed by `"<address>_<key>"`.
//! [`JsonFileStore`] writes one small JSON file per record.

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Key/value persistence for virtual numbers.
pub trait StateStore: Send + Sync {
    /// Loads the value stored under `key`. A missing record is `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<f64>, StorageError>;

    fn save(&self, key: &str, value: f64) -> Result<(), StorageError>;
}

/// On-disk form of one virtual number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualNumberRecord {
    pub value: f64,
}

/// Stores each record as `tuya_ble_virtual_<key>.json` under one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("tuya_ble_virtual_{}.json", sanitize(key)))
    }
}

/// Addresses contain `:`, which some filesystems reject.
fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<f64>, StorageError> {
        let bytes = match fs::read(self.path_for(key)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record: VirtualNumberRecord = serde_json::from_slice(&bytes)?;
        Ok(Some(record.value))
    }

    fn save(&self, key: &str, value: f64) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec(&VirtualNumberRecord { value })?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }
}

/// Process-local store, for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    values: Mutex<HashMap<String, f64>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, key: &str) -> Result<Option<f64>, StorageError> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied())
    }

    fn save(&self, key: &str, value: f64) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value);
        Ok(())
    }
}
