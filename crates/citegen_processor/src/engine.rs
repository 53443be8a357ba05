/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The citation engine: resolves a (style, source type) pair to its template,
//! renders it, and stamps the result as a [`CitationRecord`].
//!
//! Formatting is pure. Only `generate` has side effects, and only through the
//! injected [`IdSource`] and [`Clock`].

use crate::config::GenerationConfig;
use crate::error::EngineError;
use crate::record::{CitationId, CitationRecord};
use crate::render::{render_template, OutputFormat, PlainText, RenderContext};
use chrono::{DateTime, Utc};
use citegen_core::schema::required_fields;
use citegen_core::{CitationStyle, Field, FieldValues, SourceType, StyleTemplates};
use tracing::debug;

/// Mints record identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> CitationId;
}

/// Supplies record timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> CitationId {
        CitationId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Wall-clock UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic ids `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("citation")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> CitationId {
        let id = CitationId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The citation engine.
#[derive(Debug)]
pub struct Engine<I = UuidIds, C = SystemClock> {
    templates: StyleTemplates,
    config: GenerationConfig,
    ids: I,
    clock: C,
}

impl Engine {
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_sources(config, UuidIds, SystemClock)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

impl<I: IdSource, C: Clock> Engine<I, C> {
    pub fn with_sources(config: GenerationConfig, ids: I, clock: C) -> Self {
        Self {
            templates: StyleTemplates::embedded(),
            config,
            ids,
            clock,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Render a citation as plain text.
    pub fn format(&self, style: CitationStyle, source_type: SourceType, fields: &FieldValues) -> String {
        self.format_with::<PlainText>(style, source_type, fields)
    }

    /// Render a citation in a specific output format.
    pub fn format_with<F: OutputFormat>(
        &self,
        style: CitationStyle,
        source_type: SourceType,
        fields: &FieldValues,
    ) -> String {
        let ctx = RenderContext { style, fields };
        render_template::<F>(self.templates.get(style, source_type), &ctx)
    }

    /// Required fields of the source type that `fields` leaves absent.
    pub fn missing_required(&self, source_type: SourceType, fields: &FieldValues) -> Vec<Field> {
        required_fields(source_type)
            .filter(|field| !fields.contains(*field))
            .collect()
    }

    /// Format a citation and wrap it in a fresh record.
    ///
    /// With `require_fields` off (the default) missing required fields yield
    /// degraded output rather than an error.
    pub fn generate(
        &mut self,
        style: CitationStyle,
        source_type: SourceType,
        fields: &FieldValues,
    ) -> Result<CitationRecord, EngineError> {
        let missing = self.missing_required(source_type, fields);
        if !missing.is_empty() {
            if self.config.require_fields {
                return Err(EngineError::MissingRequiredField {
                    source_type,
                    fields: missing,
                });
            }
            debug!(%style, %source_type, ?missing, "generating with missing required fields");
        }

        let output = self.format(style, source_type, fields);
        let record = CitationRecord::new(
            self.ids.next_id(),
            source_type,
            style,
            fields.project(source_type),
            output,
            self.clock.now(),
        );
        debug!(id = %record.id(), %style, %source_type, "generated citation");
        Ok(record)
    }
}
