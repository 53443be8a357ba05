/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A citation session: one engine and the one history log it feeds.

use crate::config::Config;
use crate::engine::{Clock, Engine, IdSource, SystemClock, UuidIds};
use crate::error::EngineError;
use crate::history::{HistoryStorage, HistoryStore, MemoryStorage, SaveStatus};
use crate::record::{CitationId, CitationRecord};
use citegen_core::{CitationStyle, FieldValues, SourceType};

/// A generated record and the outcome of persisting it.
#[derive(Debug)]
pub struct Generated {
    pub record: CitationRecord,
    pub save: SaveStatus,
}

#[derive(Debug)]
pub struct CitationSession<S, I = UuidIds, C = SystemClock> {
    engine: Engine<I, C>,
    history: HistoryStore<S>,
}

impl CitationSession<MemoryStorage> {
    /// A session whose history lives only in this process.
    pub fn in_memory(config: &Config) -> Self {
        Self::new(config, MemoryStorage::from_config(&config.history))
    }
}

impl<S: HistoryStorage> CitationSession<S> {
    pub fn new(config: &Config, storage: S) -> Self {
        Self::from_parts(
            Engine::new(config.generation.clone()),
            HistoryStore::open(storage, &config.history),
        )
    }
}

impl<S: HistoryStorage, I: IdSource, C: Clock> CitationSession<S, I, C> {
    pub fn from_parts(engine: Engine<I, C>, history: HistoryStore<S>) -> Self {
        Self { engine, history }
    }

    /// Format a citation and record it as the newest history entry.
    ///
    /// A failed save does not fail generation; it is reported in
    /// [`Generated::save`].
    pub fn generate(
        &mut self,
        style: CitationStyle,
        source_type: SourceType,
        fields: &FieldValues,
    ) -> Result<Generated, EngineError> {
        let record = self.engine.generate(style, source_type, fields)?;
        let save = self.history.append(record.clone());
        Ok(Generated { record, save })
    }

    /// Render without recording anything.
    pub fn preview(&self, style: CitationStyle, source_type: SourceType, fields: &FieldValues) -> String {
        self.engine.format(style, source_type, fields)
    }

    pub fn remove(&mut self, id: &CitationId) -> SaveStatus {
        self.history.remove(id)
    }

    pub fn clear(&mut self) -> SaveStatus {
        self.history.clear()
    }

    pub fn flush(&mut self) -> SaveStatus {
        self.history.flush()
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn engine(&self) -> &Engine<I, C> {
        &self.engine
    }
}
