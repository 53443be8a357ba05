/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Persistence backends for the history log.
//!
//! A backend stores the whole log as one JSON array under a namespace key.
//! Each save replaces the previous snapshot.

use crate::config::{HistoryConfig, DEFAULT_NAMESPACE};
use crate::error::StorageError;
use crate::record::CitationRecord;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Load/save collaborator for a history log.
pub trait HistoryStorage {
    /// The persisted log, newest first. An absent blob is an empty log.
    fn load(&self) -> Result<Vec<CitationRecord>, StorageError>;

    /// Replace the persisted log with `records`.
    fn save(&self, records: &[CitationRecord]) -> Result<(), StorageError>;
}

impl<S: HistoryStorage + ?Sized> HistoryStorage for &S {
    fn load(&self) -> Result<Vec<CitationRecord>, StorageError> {
        (**self).load()
    }

    fn save(&self, records: &[CitationRecord]) -> Result<(), StorageError> {
        (**self).save(records)
    }
}

pub(crate) fn encode(records: &[CitationRecord]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(records)?)
}

pub(crate) fn decode(blob: &str) -> Result<Vec<CitationRecord>, StorageError> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(blob)?)
}

/// An in-process key-value blob map.
#[derive(Debug)]
pub struct MemoryStorage {
    namespace: String,
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            blobs: RefCell::default(),
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(config.namespace.clone())
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The raw blob stored under `key`.
    pub fn blob(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    /// Overwrite the raw blob under `key`.
    pub fn set_blob(&self, key: impl Into<String>, blob: impl Into<String>) {
        self.blobs.borrow_mut().insert(key.into(), blob.into());
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl HistoryStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CitationRecord>, StorageError> {
        match self.blobs.borrow().get(&self.namespace) {
            Some(blob) => decode(blob),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[CitationRecord]) -> Result<(), StorageError> {
        let blob = encode(records)?;
        self.blobs.borrow_mut().insert(self.namespace.clone(), blob);
        Ok(())
    }
}

/// A JSON file at `<dir>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    /// A file backend for the configured directory, if one is set.
    pub fn from_config(config: &HistoryConfig) -> Option<Self> {
        config
            .dir
            .as_ref()
            .map(|dir| Self::new(dir, &config.namespace))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl HistoryStorage for FileStorage {
    fn load(&self) -> Result<Vec<CitationRecord>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => decode(&blob),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, records: &[CitationRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let blob = encode(records)?;
        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
