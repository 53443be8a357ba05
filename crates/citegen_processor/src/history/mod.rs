/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The bounded, newest-first history log.
//!
//! The in-memory log is authoritative. Every mutation persists the whole
//! snapshot through a [`HistoryStorage`]; a failed save never rolls the
//! mutation back, it is reported and the store is marked dirty until a later
//! save succeeds.

pub mod storage;

pub use storage::{FileStorage, HistoryStorage, MemoryStorage};

use crate::config::HistoryConfig;
use crate::error::StorageError;
use crate::record::{CitationId, CitationRecord};
use citegen_core::CitationStyle;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Outcome of persisting after a mutation.
#[derive(Debug)]
#[must_use]
pub enum SaveStatus {
    /// The snapshot was written.
    Saved,
    /// Nothing changed, nothing was written.
    Unchanged,
    /// The in-memory log changed but the write failed.
    Failed(StorageError),
}

impl SaveStatus {
    /// True unless the save failed.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, SaveStatus::Failed(_))
    }

    /// A user-facing warning for a failed save.
    pub fn warning(&self) -> Option<String> {
        match self {
            SaveStatus::Failed(e) => Some(format!("history could not be saved: {e}")),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct HistoryStore<S> {
    records: VecDeque<CitationRecord>,
    capacity: usize,
    storage: S,
    dirty: bool,
}

impl<S: HistoryStorage> HistoryStore<S> {
    /// Load the persisted log. A load failure is logged and the store starts
    /// empty.
    pub fn open(storage: S, config: &HistoryConfig) -> Self {
        let capacity = config.effective_capacity();
        let records = match storage.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "failed to load citation history, starting empty");
                Vec::new()
            }
        };
        Self::from_loaded(storage, records, capacity)
    }

    /// Like [`open`](Self::open) but surfaces the load failure.
    pub fn try_open(storage: S, config: &HistoryConfig) -> Result<Self, StorageError> {
        let records = storage.load()?;
        Ok(Self::from_loaded(storage, records, config.effective_capacity()))
    }

    fn from_loaded(storage: S, mut records: Vec<CitationRecord>, capacity: usize) -> Self {
        if records.len() > capacity {
            debug!(loaded = records.len(), capacity, "truncating loaded history");
            records.truncate(capacity);
        }
        Self {
            records: records.into(),
            capacity,
            storage,
            dirty: false,
        }
    }

    /// Add a record as the newest entry, evicting the oldest beyond capacity.
    pub fn append(&mut self, record: CitationRecord) -> SaveStatus {
        self.records.push_front(record);
        while self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop_back() {
                debug!(id = %evicted.id(), "evicted oldest history entry");
            }
        }
        self.persist()
    }

    /// Drop the record with `id`. Absent ids change nothing.
    pub fn remove(&mut self, id: &CitationId) -> SaveStatus {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return SaveStatus::Unchanged;
        };
        self.records.remove(index);
        self.persist()
    }

    pub fn clear(&mut self) -> SaveStatus {
        self.records.clear();
        self.persist()
    }

    /// Retry persisting after a failed save.
    pub fn flush(&mut self) -> SaveStatus {
        if !self.dirty {
            return SaveStatus::Unchanged;
        }
        self.persist()
    }

    fn persist(&mut self) -> SaveStatus {
        let snapshot = self.records.make_contiguous();
        match self.storage.save(snapshot) {
            Ok(()) => {
                self.dirty = false;
                SaveStatus::Saved
            }
            Err(e) => {
                warn!(error = %e, entries = snapshot.len(), "failed to save citation history");
                self.dirty = true;
                SaveStatus::Failed(e)
            }
        }
    }

    /// Records of one style, in log order.
    pub fn filter_by_style(&self, style: CitationStyle) -> impl Iterator<Item = &CitationRecord> {
        self.records.iter().filter(move |r| r.style() == style)
    }

    /// All records, newest first.
    pub fn records(&self) -> impl Iterator<Item = &CitationRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &CitationId) -> Option<&CitationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when the last save failed and has not been retried successfully.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::engine::{Engine, FixedClock, SequentialIds};
    use chrono::{TimeZone, Utc};
    use citegen_core::{field_values, SourceType};

    fn records(n: usize, style: CitationStyle) -> Vec<CitationRecord> {
        let mut engine = Engine::with_sources(
            GenerationConfig::default(),
            SequentialIds::new("r"),
            FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()),
        );
        let fields = field_values! { "title" => "Rust Book" };
        (0..n)
            .map(|_| engine.generate(style, SourceType::Book, &fields).unwrap())
            .collect()
    }

    fn config(capacity: usize) -> HistoryConfig {
        HistoryConfig {
            capacity,
            ..Default::default()
        }
    }

    #[test]
    fn test_append_is_newest_first_and_bounded() {
        let mut store = HistoryStore::open(MemoryStorage::default(), &config(3));
        for record in records(5, CitationStyle::Apa7) {
            assert!(store.append(record).is_persisted());
        }
        let ids: Vec<_> = store.records().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["r-5", "r-4", "r-3"]);
    }

    #[test]
    fn test_remove_absent_is_unchanged() {
        let mut store = HistoryStore::open(MemoryStorage::default(), &config(50));
        let status = store.remove(&CitationId::new("missing"));
        assert!(matches!(status, SaveStatus::Unchanged));
        assert!(store.storage().blob(store.storage().namespace()).is_none());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = HistoryStore::open(MemoryStorage::default(), &config(50));
        for record in records(3, CitationStyle::Mla9) {
            let _ = store.append(record);
        }
        assert!(matches!(store.remove(&CitationId::new("r-2")), SaveStatus::Saved));
        assert!(store.get(&CitationId::new("r-2")).is_none());
        assert_eq!(store.len(), 2);
        let _ = store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_filter_by_style() {
        let mut store = HistoryStore::open(MemoryStorage::default(), &config(50));
        for record in records(2, CitationStyle::Apa7) {
            let _ = store.append(record);
        }
        assert_eq!(store.filter_by_style(CitationStyle::Apa7).count(), 2);
        assert_eq!(store.filter_by_style(CitationStyle::Chicago17).count(), 0);
    }

    #[test]
    fn test_oversized_load_is_truncated() {
        let storage = MemoryStorage::default();
        storage.save(&records(5, CitationStyle::Apa7)).unwrap();
        let store = HistoryStore::open(&storage, &config(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.records().next().unwrap().id().as_str(), "r-1");
    }

    #[test]
    fn test_corrupt_load() {
        let storage = MemoryStorage::default();
        storage.set_blob(storage.namespace().to_string(), "garbage");
        assert!(HistoryStore::try_open(&storage, &config(50)).is_err());
        let store = HistoryStore::open(&storage, &config(50));
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_save_status_warning() {
        let failed = SaveStatus::Failed(StorageError::Unavailable("quota exceeded".into()));
        assert!(!failed.is_persisted());
        assert_eq!(
            failed.warning().as_deref(),
            Some("history could not be saved: storage unavailable: quota exceeded")
        );
        assert!(SaveStatus::Saved.warning().is_none());
    }
}
