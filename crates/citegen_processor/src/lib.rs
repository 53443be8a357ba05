/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! citegen Processor
//!
//! This crate formats citations in APA 7, MLA 9 and Chicago 17 from the
//! templates embedded in `citegen_core`, and keeps a bounded, newest-first
//! history of generated citations behind a pluggable persistence backend.
//!
//! # Example
//!
//! ```rust
//! use citegen_core::{field_values, CitationStyle, SourceType};
//! use citegen_processor::{CitationSession, Config};
//!
//! let mut session = CitationSession::in_memory(&Config::default());
//! let fields = field_values! {
//!     "author" => "Smith, John",
//!     "title" => "Learning Rust",
//!     "publisher" => "O'Reilly",
//!     "year" => 2023,
//! };
//! let generated = session
//!     .generate(CitationStyle::Apa7, SourceType::Book, &fields)
//!     .unwrap();
//! assert_eq!(
//!     generated.record.output(),
//!     "Smith, J. (2023). *Learning Rust*. O'Reilly."
//! );
//! assert_eq!(session.history().len(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod record;
pub mod render;
pub mod session;
pub mod values;

pub use config::{Config, GenerationConfig, HistoryConfig, MAX_HISTORY};
pub use engine::{Clock, Engine, FixedClock, IdSource, SequentialIds, SystemClock, UuidIds};
pub use error::{ConfigError, EngineError, StorageError};
pub use history::{FileStorage, HistoryStorage, HistoryStore, MemoryStorage, SaveStatus};
pub use record::{CitationId, CitationRecord};
pub use render::{render_template, Html, OutputFormat, PlainText, RenderContext};
pub use session::{CitationSession, Generated};
